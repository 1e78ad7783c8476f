//! Session service
//!
//! Provisions users on first login and builds the per-request session.

use hourboard_common::Identity;
use hourboard_core::{DomainError, Session, User};
use tracing::{info, instrument};

use crate::dto::SessionResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Session service
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Return the stored user for an identity, creating it on first login
    ///
    /// New users get the identity's display name and email, role member,
    /// and zero hours. A concurrent first login that loses the create race
    /// reads the winner's record.
    #[instrument(skip(self, identity), fields(user_id = %identity.uid))]
    pub async fn provision(&self, identity: &Identity) -> ServiceResult<User> {
        if let Some(user) = self.ctx.user_repo().find_by_id(&identity.uid).await? {
            return Ok(user);
        }

        let user = User::provisioned(
            identity.uid.clone(),
            identity.name.clone(),
            identity.email.clone(),
        );
        match self.ctx.user_repo().create(&user).await {
            Ok(()) => {
                info!(user_id = %user.id, "User provisioned");
                Ok(user)
            }
            Err(DomainError::UserAlreadyExists(_)) => self
                .ctx
                .user_repo()
                .find_by_id(&identity.uid)
                .await?
                .ok_or_else(|| DomainError::UserNotFound(identity.uid.clone()).into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Login call: provision and describe the session
    #[instrument(skip(self, identity), fields(user_id = %identity.uid))]
    pub async fn login(&self, identity: &Identity) -> ServiceResult<SessionResponse> {
        let user = self.provision(identity).await?;
        Ok(SessionResponse::from(&user))
    }

    /// Session for an authenticated request, built from the stored user
    pub async fn session_for(&self, identity: &Identity) -> ServiceResult<Session> {
        let user = self.provision(identity).await?;
        Ok(Session::from_user(&user))
    }
}
