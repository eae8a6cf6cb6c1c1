//! Route definitions for the ClubHub HTTP API.
//!
//! All API routes are organized by surface and mounted under `/api`.
//! The staff gate is layered over the whole router (fallback included),
//! so browser navigation to staff pages is redirected to sign-in even
//! though this server only renders the API.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::error::ApiErrorResponse;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(parent_routes())
        .merge(account_routes())
        .merge(class_routes())
        .merge(club_routes())
        .merge(dashboard_routes())
        .merge(webhook_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .fallback(fallback)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::staff_gate,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Staff session probe.
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/check", get(handlers::auth::check))
}

/// Parent portal: login, logout, password, profile.
fn parent_routes() -> Router<AppState> {
    Router::new()
        .route("/parent/login", post(handlers::parent::login))
        .route("/parent/logout", post(handlers::parent::logout))
        .route("/parent/password", post(handlers::parent::change_password))
        .route("/parent/profile", get(handlers::parent::get_profile))
        .route("/parent/profile", patch(handlers::parent::update_profile))
}

/// Member portal: login, logout, password, profile.
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/account/login", post(handlers::account::login))
        .route("/account/logout", post(handlers::account::logout))
        .route(
            "/account/password",
            post(handlers::account::change_password),
        )
        .route("/account/profile", get(handlers::account::get_profile))
        .route("/account/profile", patch(handlers::account::update_profile))
}

/// Staff class management.
fn class_routes() -> Router<AppState> {
    Router::new()
        .route("/classes", get(handlers::classes::list_classes))
        .route("/classes", post(handlers::classes::create_class))
        .route("/classes/{id}", get(handlers::classes::get_class))
        .route("/classes/{id}", delete(handlers::classes::delete_class))
}

/// Staff club settings.
fn club_routes() -> Router<AppState> {
    Router::new()
        .route("/club", get(handlers::club::get_club))
        .route("/club", patch(handlers::club::update_club))
}

/// Staff dashboard.
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::dashboard::summary))
}

/// Payment provider webhooks (public at the gate).
fn webhook_routes() -> Router<AppState> {
    Router::new().route("/webhooks/payments", post(handlers::webhooks::payments))
}

/// Fallback for unrouted paths.
///
/// Runs under the gate like everything else: unauthenticated staff page
/// navigation never reaches here (it is redirected first), so this only
/// answers for genuinely unknown paths.
async fn fallback() -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse {
            error: "NOT_FOUND".to_string(),
            message: "No such route".to_string(),
        }),
    )
}
