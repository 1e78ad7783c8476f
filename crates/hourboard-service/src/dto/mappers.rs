//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use hourboard_core::{
    AdvisorRequest, CategorySplit, DashboardView, Event, HistoricalEvent, Session, User,
};

use super::responses::{
    AdvisorRequestResponse, CategorySplitResponse, DashboardViewResponse, EventResponse,
    HistoricalEventResponse, LeaderboardEntry, SessionResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            hours: user.hours,
            temporary_advisor: user.temporary_advisor,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for SessionResponse {
    fn from(user: &User) -> Self {
        Self {
            user: UserResponse::from(user),
            view: DashboardView::for_role(user.role),
            available_views: DashboardView::available(user.role),
            capabilities: user.capabilities().list(),
        }
    }
}

impl From<&Session> for DashboardViewResponse {
    fn from(session: &Session) -> Self {
        Self {
            view: session.dashboard_view(),
            available_views: DashboardView::available(session.role),
        }
    }
}

/// Rank users already sorted by the leaderboard
pub fn leaderboard_entries(ranked: &[User]) -> Vec<LeaderboardEntry> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, user)| LeaderboardEntry {
            rank: i + 1,
            id: user.id.to_string(),
            name: user.name.clone(),
            hours: user.hours,
        })
        .collect()
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            user_id: event.user_id.to_string(),
            name: event.name.clone(),
            hours: event.hours,
            tag: event.tag.clone(),
            date: event.date,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

impl From<&HistoricalEvent> for HistoricalEventResponse {
    fn from(event: &HistoricalEvent) -> Self {
        Self {
            id: event.id.to_string(),
            user_id: event.user_id.to_string(),
            name: event.name.clone(),
            hours: event.hours,
            tag: event.tag.clone(),
            date: event.date,
            school_year: event.school_year.to_string(),
        }
    }
}

impl CategorySplitResponse {
    pub fn new(tag: &str, split: CategorySplit) -> Self {
        Self {
            tag: tag.to_string(),
            matching: split.matching,
            non_matching: split.non_matching,
        }
    }
}

// ============================================================================
// Request Mappers
// ============================================================================

impl From<&AdvisorRequest> for AdvisorRequestResponse {
    fn from(request: &AdvisorRequest) -> Self {
        Self {
            id: request.id.to_string(),
            user_id: request.user_id.to_string(),
            user_name: request.user_name.clone(),
            status: request.status.as_str(),
            timestamp: request.timestamp,
        }
    }
}
