//! Event handlers

use axum::{extract::State, Json};
use hourboard_service::{EventResponse, EventService, EventsQuery, ReassignTagRequest};

use super::optional_id;
use crate::extractors::{AuthUser, DocumentPath, QueryParams, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List events visible to the caller
///
/// GET /events?userId
pub async fn list_events(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<EventsQuery>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let selected = optional_id(query.user_id.as_deref(), "userId")?;

    let service = EventService::new(state.service_context());
    let events = service.list_events(&auth.session, selected.as_ref()).await?;
    Ok(Json(events))
}

/// Move an event to another category
///
/// PATCH /events/{event_id}/tag
pub async fn reassign_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    DocumentPath(event_id): DocumentPath,
    ValidatedJson(request): ValidatedJson<ReassignTagRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let event = service
        .reassign_tag(&auth.session, &event_id, &request.tag)
        .await?;
    Ok(Json(event))
}
