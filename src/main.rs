//! StockHub Server — role-based inventory request management.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use stockhub_core::config::AppConfig;
use stockhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("STOCKHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting StockHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = stockhub_database::connection::create_pool(&config.database).await?;

    stockhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let principal_repo = Arc::new(
        stockhub_database::repositories::principal::PrincipalRepository::new(db_pool.clone()),
    );
    let item_repo = Arc::new(stockhub_database::repositories::item::ItemRepository::new(
        db_pool.clone(),
    ));
    let request_repo = Arc::new(
        stockhub_database::repositories::request::RequestRepository::new(db_pool.clone()),
    );
    let notification_repo = Arc::new(
        stockhub_database::repositories::notification::NotificationRepository::new(db_pool.clone()),
    );
    let audit_repo = Arc::new(
        stockhub_database::repositories::audit::AuditLogRepository::new(db_pool.clone()),
    );

    // ── Step 3: Auth primitives ──────────────────────────────────
    let password_hasher = Arc::new(stockhub_auth::password::PasswordHasher::new());
    let jwt_encoder = Arc::new(stockhub_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(stockhub_auth::jwt::JwtDecoder::new(&config.auth));

    // ── Step 4: Services ─────────────────────────────────────────
    let principal_service = Arc::new(stockhub_service::principal::PrincipalService::new(
        Arc::clone(&principal_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
    ));
    let catalog_service = Arc::new(stockhub_service::catalog::CatalogService::new(
        Arc::clone(&item_repo),
        Arc::clone(&audit_repo),
    ));
    let request_service = Arc::new(stockhub_service::request::RequestService::new(
        Arc::clone(&request_repo),
        Arc::clone(&item_repo),
        Arc::clone(&notification_repo),
        Arc::clone(&audit_repo),
    ));
    let notification_service = Arc::new(stockhub_service::notification::NotificationService::new(
        Arc::clone(&notification_repo),
    ));
    let audit_service = Arc::new(stockhub_service::audit::AuditService::new(Arc::clone(
        &audit_repo,
    )));
    let dashboard_service = Arc::new(stockhub_service::dashboard::DashboardService::new(
        Arc::clone(&item_repo),
        Arc::clone(&request_repo),
        Arc::clone(&notification_repo),
    ));

    tracing::info!("Services initialized");

    // ── Step 5: Router + listener ────────────────────────────────
    let app_state = stockhub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool,
        jwt_decoder,
        principal_repo,
        principal_service,
        catalog_service,
        request_service,
        notification_service,
        audit_service,
        dashboard_service,
    };

    let app = stockhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("StockHub server listening on {addr}");

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("StockHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
