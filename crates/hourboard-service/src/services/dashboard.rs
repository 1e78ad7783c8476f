//! Dashboard service
//!
//! Composes the member view: a user's events, filters, totals, tag
//! breakdowns, and the leaderboard.

use hourboard_core::{
    compute_leaderboard, compute_user_totals, distinct_tags, filter_events, group_hours_by_tag,
    split_by_primary_tag, Capabilities, DocumentId, DomainError, EventFilter, Session,
};
use tracing::instrument;

use crate::dto::{
    leaderboard_entries, CategorySplitResponse, DashboardQuery, DashboardViewResponse,
    EventResponse, LeaderboardEntry, MemberDashboardResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Member dashboard for the caller or, for officers and above, one
    /// other user (read-only)
    #[instrument(skip(self, session, query), fields(user_id = %session.user_id))]
    pub async fn member_dashboard(
        &self,
        session: &Session,
        query: DashboardQuery,
    ) -> ServiceResult<MemberDashboardResponse> {
        session.require(Capabilities::VIEW_OWN_EVENTS)?;

        let viewed = match query.user_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => DocumentId::parse(raw)
                .map_err(|e| DomainError::ValidationError(e.to_string()))?,
            None => session.user_id.clone(),
        };
        if !session.can_view_user_events(&viewed) {
            session.require(Capabilities::VIEW_OTHER_USER_EVENTS)?;
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(&viewed)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(viewed.clone()))?;
        let events = self.ctx.event_repo().find_by_user(&viewed).await?;

        let filter = EventFilter {
            month: query.month,
            search: query.search,
            tag: query.tag,
        };
        let filtered = filter_events(&events, &filter);
        let primary = &self.ctx.tags().primary;

        Ok(MemberDashboardResponse {
            user: UserResponse::from(&user),
            total_hours: compute_user_totals(&events),
            hours_by_tag: group_hours_by_tag(&filtered),
            primary_split: CategorySplitResponse::new(
                primary,
                split_by_primary_tag(&filtered, primary),
            ),
            tags: distinct_tags(&events),
            events: filtered.iter().map(EventResponse::from).collect(),
            leaderboard: self.ranked().await?,
        })
    }

    /// Every user ranked by stored hours
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn leaderboard(&self, session: &Session) -> ServiceResult<Vec<LeaderboardEntry>> {
        session.require(Capabilities::VIEW_LEADERBOARD)?;
        self.ranked().await
    }

    /// Which dashboard the session gets
    pub fn dashboard_view(&self, session: &Session) -> DashboardViewResponse {
        DashboardViewResponse::from(session)
    }

    async fn ranked(&self) -> ServiceResult<Vec<LeaderboardEntry>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(leaderboard_entries(&compute_leaderboard(&users)))
    }
}
