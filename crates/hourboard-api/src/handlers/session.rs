//! Session handler
//!
//! Login entry point: provisions first-time users and returns their view.

use axum::{extract::State, Json};
use hourboard_service::{SessionResponse, SessionService};

use crate::extractors::AuthIdentity;
use crate::response::ApiResult;
use crate::state::AppState;

/// Start a session for the token's identity
///
/// POST /session
pub async fn login(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
) -> ApiResult<Json<SessionResponse>> {
    let service = SessionService::new(state.service_context());
    let response = service.login(&identity).await?;
    Ok(Json(response))
}
