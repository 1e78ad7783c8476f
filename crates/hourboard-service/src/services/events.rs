//! Event service
//!
//! Scoped event listing and tag reassignment.

use hourboard_core::{Capabilities, DocumentId, DomainError, EventScope, Session};
use tracing::{info, instrument};

use crate::dto::EventResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Events visible to the session
    ///
    /// `selected` picks one other user (read-only); without it advisors see
    /// everything and everyone else sees their own events.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list_events(
        &self,
        session: &Session,
        selected: Option<&DocumentId>,
    ) -> ServiceResult<Vec<EventResponse>> {
        let events = match session.event_scope(selected)? {
            EventScope::Own => self.ctx.event_repo().find_by_user(&session.user_id).await?,
            EventScope::User(id) => self.ctx.event_repo().find_by_user(&id).await?,
            EventScope::All => self.ctx.event_repo().find_all().await?,
        };
        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// Change an event's tag, the only event mutation
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn reassign_tag(
        &self,
        session: &Session,
        event_id: &DocumentId,
        tag: &str,
    ) -> ServiceResult<EventResponse> {
        session.require(Capabilities::MANAGE_EVENTS)?;
        if !self.ctx.tags().is_allowed(tag) {
            return Err(DomainError::InvalidTag(tag.to_string()).into());
        }

        self.ctx.event_repo().update_tag(event_id, tag).await?;
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id.clone()))?;

        info!(event_id = %event_id, tag, "Event tag reassigned");
        Ok(EventResponse::from(&event))
    }
}
