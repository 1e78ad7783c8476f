//! School-year archival handler

use axum::{extract::State, Json};
use hourboard_service::{ArchivalResponse, ArchivalService, ArchiveRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Archive all live events under a school year and reset hours
///
/// POST /archive
pub async fn archive_school_year(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ArchiveRequest>,
) -> ApiResult<Json<ArchivalResponse>> {
    let service = ArchivalService::new(state.service_context());
    let response = service
        .archive_school_year(&auth.session, &request.school_year)
        .await?;
    Ok(Json(response))
}
