//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    advisor_requests, archive, dashboard, events, health, history, hours, session, users,
};
use crate::state::AppState;

/// Create the main API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(session::login))
        .route("/dashboard", get(dashboard::member_dashboard))
        .route("/dashboard/view", get(dashboard::dashboard_view))
        .route("/leaderboard", get(dashboard::leaderboard))
        .merge(user_routes())
        .merge(hours_routes())
        .merge(history_routes())
        .merge(advisor_request_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/officers", get(users::list_officers))
        .route("/users/:user_id", delete(users::delete_user))
        .route("/users/:user_id/role", patch(users::change_role))
        .route(
            "/users/:user_id/temporary-advisor",
            post(users::toggle_temporary_advisor),
        )
}

fn hours_routes() -> Router<AppState> {
    Router::new()
        .route("/hours", post(hours::add_hours))
        .route("/hours/reset", post(hours::reset_hours))
        .route("/events", get(events::list_events))
        .route("/events/:event_id/tag", patch(events::reassign_tag))
}

fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/archive", post(archive::archive_school_year))
        .route(
            "/history",
            get(history::list_history).delete(history::delete_history),
        )
        .route("/history/years", get(history::available_years))
}

fn advisor_request_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/advisor-requests",
            get(advisor_requests::list_requests).post(advisor_requests::submit_request),
        )
        .route(
            "/advisor-requests/:request_id/approve",
            post(advisor_requests::approve_request),
        )
        .route(
            "/advisor-requests/:request_id/deny",
            post(advisor_requests::deny_request),
        )
}
