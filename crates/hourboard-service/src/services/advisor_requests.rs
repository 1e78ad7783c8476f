//! Advisor request service
//!
//! Officers ask for temporary advisor privileges; advisors approve or deny.
//! Advisors can also flip the temporary-advisor flag directly.

use hourboard_core::{AdvisorRequest, Capabilities, DocumentId, DomainError, Session};
use tracing::{info, instrument};

use crate::dto::{AdvisorRequestResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Advisor request service
pub struct AdvisorRequestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdvisorRequestService<'a> {
    /// Create a new AdvisorRequestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a pending request for the caller
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn submit(&self, session: &Session) -> ServiceResult<AdvisorRequestResponse> {
        session.require(Capabilities::SUBMIT_ADVISOR_REQUEST)?;

        if self.ctx.settings().requests.single_pending {
            let pending = self
                .ctx
                .request_repo()
                .find_pending_by_user(&session.user_id)
                .await?;
            if !pending.is_empty() {
                return Err(DomainError::PendingRequestExists(session.user_id.clone()).into());
            }
        }

        let request = AdvisorRequest::new(session.user_id.clone(), session.name.clone());
        self.ctx.request_repo().create(&request).await?;

        info!(request_id = %request.id, "Advisor request submitted");
        Ok(AdvisorRequestResponse::from(&request))
    }

    /// All requests, for the advisor view
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list(&self, session: &Session) -> ServiceResult<Vec<AdvisorRequestResponse>> {
        session.require(Capabilities::REVIEW_ADVISOR_REQUESTS)?;
        let requests = self.ctx.request_repo().find_all().await?;
        Ok(requests.iter().map(AdvisorRequestResponse::from).collect())
    }

    /// Grant the requester the flag, then remove the request
    ///
    /// The two writes are not atomic; if the delete fails the request stays
    /// and approving it again is harmless.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn approve(&self, session: &Session, request_id: &DocumentId) -> ServiceResult<()> {
        session.require(Capabilities::REVIEW_ADVISOR_REQUESTS)?;
        let request = self.find(request_id).await?;

        self.ctx
            .user_repo()
            .set_temporary_advisor(&request.user_id, true)
            .await?;
        self.ctx.request_repo().delete(&request.id).await?;

        info!(request_id = %request.id, target_id = %request.user_id, "Advisor request approved");
        Ok(())
    }

    /// Remove the request without granting anything
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn deny(&self, session: &Session, request_id: &DocumentId) -> ServiceResult<()> {
        session.require(Capabilities::REVIEW_ADVISOR_REQUESTS)?;
        self.ctx.request_repo().delete(request_id).await?;

        info!(request_id = %request_id, "Advisor request denied");
        Ok(())
    }

    /// Set the flag to the opposite of `current_value`
    ///
    /// With atomic updates this is a compare-and-swap that fails when the
    /// stored value no longer equals `current_value`; otherwise the new
    /// value is written blindly.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn toggle_temporary_advisor(
        &self,
        session: &Session,
        target: &DocumentId,
        current_value: bool,
    ) -> ServiceResult<UserResponse> {
        session.require(Capabilities::MANAGE_TEMPORARY_ADVISORS)?;
        let new_value = !current_value;

        if self.ctx.atomic_updates() {
            let swapped = self
                .ctx
                .user_repo()
                .compare_and_set_temporary_advisor(target, current_value, new_value)
                .await?;
            if !swapped {
                return Err(DomainError::StaleTemporaryAdvisorFlag(target.clone()).into());
            }
        } else {
            self.ctx
                .user_repo()
                .set_temporary_advisor(target, new_value)
                .await?;
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(target)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(target.clone()))?;

        info!(target_id = %target, temporary_advisor = new_value, "Temporary advisor toggled");
        Ok(UserResponse::from(&user))
    }

    async fn find(&self, request_id: &DocumentId) -> ServiceResult<AdvisorRequest> {
        self.ctx
            .request_repo()
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::RequestNotFound(request_id.clone())))
    }
}
