//! Hours service
//!
//! Hour addition and the bulk hour reset.

use futures::future::join_all;
use hourboard_core::{Capabilities, DocumentId, DomainError, Event, EventMonth, Session, User};
use tracing::{error, info, instrument, warn};

use crate::dto::{AddHoursRequest, AddHoursResponse, EventResponse, ResetHoursResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Hours service
pub struct HoursService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HoursService<'a> {
    /// Create a new HoursService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record an event and add its hours to the user's total
    ///
    /// Every input is checked before the first write. The event is written
    /// first, then the total is raised; the two writes are not atomic
    /// together.
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn add_hours(
        &self,
        session: &Session,
        request: AddHoursRequest,
    ) -> ServiceResult<AddHoursResponse> {
        session.require(Capabilities::ADD_HOURS)?;

        let hours = request
            .hours
            .positive()
            .ok_or_else(|| DomainError::InvalidHours(request.hours.raw()))?;
        let name = request.event_name.trim();
        if name.is_empty() {
            return Err(DomainError::ValidationError("Event name is required".to_string()).into());
        }
        if !self.ctx.tags().is_allowed(&request.tag) {
            return Err(DomainError::InvalidTag(request.tag).into());
        }
        let month = EventMonth::new(request.year, request.month)?;
        let target = DocumentId::parse(&request.user_id)
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(&target)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(target.clone()))?;

        let expected_total = user.hours_after(hours).ok_or_else(|| {
            DomainError::ValidationError(format!(
                "Adding {hours} hours would exceed the maximum total of {}",
                User::MAX_HOURS
            ))
        })?;

        let event = Event::new(target.clone(), name.to_string(), hours, request.tag, month);
        self.ctx.event_repo().create(&event).await?;

        let total_hours = if self.ctx.atomic_updates() {
            self.ctx.user_repo().increment_hours(&target, hours).await?
        } else {
            // Legacy read-then-write: concurrent additions can lose updates
            self.ctx.user_repo().set_hours(&target, expected_total).await?;
            expected_total
        };

        info!(
            target_id = %target,
            event_id = %event.id,
            hours,
            total_hours,
            "Hours added"
        );

        Ok(AddHoursResponse {
            event: EventResponse::from(&event),
            total_hours,
        })
    }

    /// Advisor action: set every user's hours to zero
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn reset_all_hours(&self, session: &Session) -> ServiceResult<ResetHoursResponse> {
        session.require(Capabilities::RESET_HOURS)?;
        let users_reset = self.reset_procedure().await?;
        Ok(ResetHoursResponse { users_reset })
    }

    /// Zero every user's hours with all updates in flight at once
    ///
    /// Fails with `PartialFailure` if any single update failed; the
    /// updates that succeeded stay applied. Safe to repeat.
    pub(crate) async fn reset_procedure(&self) -> ServiceResult<usize> {
        let users = self.ctx.user_repo().find_all().await?;
        let total = users.len();

        let results = join_all(
            users
                .iter()
                .map(|user| self.ctx.user_repo().set_hours(&user.id, 0)),
        )
        .await;

        let mut failed = 0;
        for (user, result) in users.iter().zip(results) {
            if let Err(e) = result {
                warn!(target_id = %user.id, error = %e, "Hour reset failed for user");
                failed += 1;
            }
        }

        if failed > 0 {
            error!(failed, total, "Hour reset incomplete");
            return Err(DomainError::PartialFailure {
                operation: "hour reset",
                failed,
                total,
            }
            .into());
        }

        info!(users_reset = total, "Hours reset");
        Ok(total)
    }
}
