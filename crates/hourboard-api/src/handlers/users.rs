//! User management handlers

use axum::{extract::State, Json};
use hourboard_service::{
    AdvisorRequestService, ChangeRoleRequest, CreateUserRequest, ToggleTemporaryAdvisorRequest,
    UserResponse, UserService,
};

use crate::extractors::{AuthUser, DocumentPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List every user
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_users(&auth.session).await?;
    Ok(Json(users))
}

/// List officers (for the temporary-advisor panel)
///
/// GET /users/officers
pub async fn list_officers(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let officers = service.list_officers(&auth.session).await?;
    Ok(Json(officers))
}

/// Add a user record by hand
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(&auth.session, request).await?;
    Ok(Created(Json(user)))
}

/// Change a user's role
///
/// PATCH /users/{user_id}/role
pub async fn change_role(
    State(state): State<AppState>,
    auth: AuthUser,
    DocumentPath(user_id): DocumentPath,
    ValidatedJson(request): ValidatedJson<ChangeRoleRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service
        .change_role(&auth.session, &user_id, request.role)
        .await?;
    Ok(Json(user))
}

/// Delete a user
///
/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    DocumentPath(user_id): DocumentPath,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete_user(&auth.session, &user_id).await?;
    Ok(NoContent)
}

/// Flip an officer's temporary-advisor flag
///
/// POST /users/{user_id}/temporary-advisor
pub async fn toggle_temporary_advisor(
    State(state): State<AppState>,
    auth: AuthUser,
    DocumentPath(user_id): DocumentPath,
    ValidatedJson(request): ValidatedJson<ToggleTemporaryAdvisorRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = AdvisorRequestService::new(state.service_context());
    let user = service
        .toggle_temporary_advisor(&auth.session, &user_id, request.current_value)
        .await?;
    Ok(Json(user))
}
