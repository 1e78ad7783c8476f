//! User service
//!
//! User management from the advisor panel: listing, creation, role changes,
//! and deletion.

use hourboard_core::{Capabilities, DocumentId, DomainError, Role, Session, User};
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All users in retrieval order
    ///
    /// Needed by anyone who can switch the viewed user.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list_users(&self, session: &Session) -> ServiceResult<Vec<UserResponse>> {
        session.require(Capabilities::VIEW_OTHER_USER_EVENTS)?;
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Users with role officer, for the temporary-advisor panel
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list_officers(&self, session: &Session) -> ServiceResult<Vec<UserResponse>> {
        session.require(Capabilities::MANAGE_TEMPORARY_ADVISORS)?;
        let officers = self.ctx.user_repo().find_by_role(Role::Officer).await?;
        Ok(officers.iter().map(UserResponse::from).collect())
    }

    /// Create a user with zero hours and a generated id
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn create_user(
        &self,
        session: &Session,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        session.require(Capabilities::MANAGE_USERS)?;

        let user = User::new(
            DocumentId::generate(),
            request.name.trim().to_string(),
            request.email.trim().to_string(),
            request.role,
        );
        self.ctx.user_repo().create(&user).await?;

        info!(created_id = %user.id, role = %user.role, "User created");
        Ok(UserResponse::from(&user))
    }

    /// Persist a new role
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn change_role(
        &self,
        session: &Session,
        target: &DocumentId,
        role: Role,
    ) -> ServiceResult<UserResponse> {
        session.require(Capabilities::MANAGE_USERS)?;

        self.ctx.user_repo().update_role(target, role).await?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(target)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(target.clone()))?;

        info!(target_id = %target, role = %role, "Role changed");
        Ok(UserResponse::from(&user))
    }

    /// Delete the user record; the user's events are kept
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn delete_user(&self, session: &Session, target: &DocumentId) -> ServiceResult<()> {
        session.require(Capabilities::MANAGE_USERS)?;

        self.ctx.user_repo().delete(target).await?;

        info!(target_id = %target, "User deleted");
        Ok(())
    }
}
