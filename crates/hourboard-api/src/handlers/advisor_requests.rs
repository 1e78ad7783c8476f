//! Advisor-access request handlers

use axum::{extract::State, Json};
use hourboard_service::{AdvisorRequestResponse, AdvisorRequestService};

use crate::extractors::{AuthUser, DocumentPath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Ask for temporary advisor access
///
/// POST /advisor-requests
pub async fn submit_request(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Created<Json<AdvisorRequestResponse>>> {
    let service = AdvisorRequestService::new(state.service_context());
    let request = service.submit(&auth.session).await?;
    Ok(Created(Json(request)))
}

/// Pending requests awaiting review
///
/// GET /advisor-requests
pub async fn list_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AdvisorRequestResponse>>> {
    let service = AdvisorRequestService::new(state.service_context());
    let requests = service.list(&auth.session).await?;
    Ok(Json(requests))
}

/// Grant the requester temporary advisor access
///
/// POST /advisor-requests/{request_id}/approve
pub async fn approve_request(
    State(state): State<AppState>,
    auth: AuthUser,
    DocumentPath(request_id): DocumentPath,
) -> ApiResult<NoContent> {
    let service = AdvisorRequestService::new(state.service_context());
    service.approve(&auth.session, &request_id).await?;
    Ok(NoContent)
}

/// Discard a request
///
/// POST /advisor-requests/{request_id}/deny
pub async fn deny_request(
    State(state): State<AppState>,
    auth: AuthUser,
    DocumentPath(request_id): DocumentPath,
) -> ApiResult<NoContent> {
    let service = AdvisorRequestService::new(state.service_context());
    service.deny(&auth.session, &request_id).await?;
    Ok(NoContent)
}
