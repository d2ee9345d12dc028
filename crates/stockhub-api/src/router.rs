//! Route definitions for the StockHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(item_routes())
        .merge(request_routes())
        .merge(notification_routes())
        .merge(audit_routes())
        .merge(dashboard_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Catalog endpoints
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(handlers::item::search_items))
        .route("/items", post(handlers::item::create_item))
        .route("/items/available", get(handlers::item::list_available_items))
        .route("/items/{id}", put(handlers::item::update_item))
}

/// Request lifecycle endpoints
fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/requests", post(handlers::request::submit_request))
        .route("/requests", get(handlers::request::list_requests))
        .route(
            "/requests/pending",
            get(handlers::request::list_pending_requests),
        )
        .route(
            "/requests/{id}/approve",
            post(handlers::request::approve_request),
        )
        .route(
            "/requests/{id}/reject",
            post(handlers::request::reject_request),
        )
        .route(
            "/requests/{id}/forward",
            post(handlers::request::forward_request),
        )
        .route(
            "/requests/{id}/complete",
            post(handlers::request::complete_request),
        )
}

/// Notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
}

/// Audit log endpoints
fn audit_routes() -> Router<AppState> {
    Router::new().route("/audit", get(handlers::audit::list_audit))
}

/// Dashboard endpoints
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(handlers::dashboard::stats))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors.allow_methods(methods)
}
