//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AddHoursRequest, ArchiveRequest, ChangeRoleRequest, CreateUserRequest, DashboardQuery,
    EventsQuery, HistoryQuery, HoursInput, ReassignTagRequest, ToggleTemporaryAdvisorRequest,
};

pub use responses::{
    AddHoursResponse, AdvisorRequestResponse, ApiResponse, ArchivalResponse,
    AvailableYearsResponse, CategorySplitResponse, DashboardViewResponse, DeleteHistoryResponse,
    EventResponse, HealthChecks, HealthResponse, HistoricalEventResponse, LeaderboardEntry,
    MemberDashboardResponse, ReadinessResponse, ResetHoursResponse, SessionResponse, UserResponse,
};

pub use mappers::leaderboard_entries;
