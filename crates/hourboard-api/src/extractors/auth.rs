//! Authentication extractors
//!
//! Verifies the identity token from the Authorization header and resolves
//! the caller's session from the stored user record.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use hourboard_common::Identity;
use hourboard_core::Session;
use hourboard_service::SessionService;

use crate::response::ApiError;
use crate::state::AppState;

/// Caller identity as asserted by a verified identity token
///
/// No store access happens here; use [`AuthUser`] when the handler needs
/// the caller's role.
#[derive(Debug, Clone)]
pub struct AuthIdentity(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for AuthIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let identity = app_state
            .identity_service()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected identity token");
                ApiError::from(e)
            })?;

        Ok(AuthIdentity(identity))
    }
}

/// Authenticated caller with a resolved session
///
/// A first-time caller is provisioned as a member before the session is built.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub identity: Identity,
    pub session: Session,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthIdentity(identity) = AuthIdentity::from_request_parts(parts, state).await?;

        let app_state = AppState::from_ref(state);
        let session = SessionService::new(app_state.service_context())
            .session_for(&identity)
            .await?;

        Ok(AuthUser { identity, session })
    }
}
