//! Historical record handlers

use axum::{extract::State, Json};
use hourboard_service::{
    AvailableYearsResponse, DeleteHistoryResponse, HistoricalEventResponse, HistoryQuery,
    HistoryService,
};

use crate::extractors::{AuthUser, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Archived events, optionally for one school year
///
/// GET /history?year
pub async fn list_history(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<HistoryQuery>,
) -> ApiResult<Json<Vec<HistoricalEventResponse>>> {
    let service = HistoryService::new(state.service_context());
    let events = service.list(&auth.session, query.year()).await?;
    Ok(Json(events))
}

/// School years available for filtering
///
/// GET /history/years
pub async fn available_years(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AvailableYearsResponse>> {
    let service = HistoryService::new(state.service_context());
    let years = service.available_years(&auth.session).await?;
    Ok(Json(years))
}

/// Delete archived events, one school year or all of them
///
/// DELETE /history?year
pub async fn delete_history(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<HistoryQuery>,
) -> ApiResult<Json<DeleteHistoryResponse>> {
    let service = HistoryService::new(state.service_context());
    let response = service.delete(&auth.session, query.year()).await?;
    Ok(Json(response))
}
