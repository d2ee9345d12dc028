//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use sqlx::PgPool;

use stockhub_auth::jwt::JwtDecoder;
use stockhub_core::config::AppConfig;
use stockhub_database::repositories::principal::PrincipalRepository;
use stockhub_service::audit::AuditService;
use stockhub_service::catalog::CatalogService;
use stockhub_service::dashboard::DashboardService;
use stockhub_service::notification::NotificationService;
use stockhub_service::principal::PrincipalService;
use stockhub_service::request::RequestService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Principal repository; the auth extractor reloads the principal row
    /// on every request so role changes take effect immediately.
    pub principal_repo: Arc<PrincipalRepository>,

    /// Account service (login, refresh, profile).
    pub principal_service: Arc<PrincipalService>,
    /// Catalog service.
    pub catalog_service: Arc<CatalogService>,
    /// Request lifecycle service.
    pub request_service: Arc<RequestService>,
    /// Notification service.
    pub notification_service: Arc<NotificationService>,
    /// Audit trail service.
    pub audit_service: Arc<AuditService>,
    /// Dashboard statistics service.
    pub dashboard_service: Arc<DashboardService>,
}
