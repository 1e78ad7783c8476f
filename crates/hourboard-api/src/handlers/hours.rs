//! Hour-addition handlers

use axum::{extract::State, Json};
use hourboard_service::{AddHoursRequest, AddHoursResponse, HoursService, ResetHoursResponse};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record an event and credit its hours to a user
///
/// POST /hours
pub async fn add_hours(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AddHoursRequest>,
) -> ApiResult<Created<Json<AddHoursResponse>>> {
    let service = HoursService::new(state.service_context());
    let response = service.add_hours(&auth.session, request).await?;
    Ok(Created(Json(response)))
}

/// Zero every user's hour counter
///
/// POST /hours/reset
pub async fn reset_hours(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ResetHoursResponse>> {
    let service = HoursService::new(state.service_context());
    let response = service.reset_all_hours(&auth.session).await?;
    Ok(Json(response))
}
