//! Dashboard handlers

use axum::{extract::State, Json};
use hourboard_service::{
    DashboardQuery, DashboardService, DashboardViewResponse, LeaderboardEntry,
    MemberDashboardResponse,
};

use crate::extractors::{AuthUser, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Member or officer dashboard, optionally for another user and filtered
///
/// GET /dashboard?userId&month&search&tag
pub async fn member_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<DashboardQuery>,
) -> ApiResult<Json<MemberDashboardResponse>> {
    let service = DashboardService::new(state.service_context());
    let response = service.member_dashboard(&auth.session, query).await?;
    Ok(Json(response))
}

/// Which dashboard the caller lands on
///
/// GET /dashboard/view
pub async fn dashboard_view(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<DashboardViewResponse> {
    let service = DashboardService::new(state.service_context());
    Json(service.dashboard_view(&auth.session))
}

/// Hours leaderboard
///
/// GET /leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let service = DashboardService::new(state.service_context());
    let entries = service.leaderboard(&auth.session).await?;
    Ok(Json(entries))
}
