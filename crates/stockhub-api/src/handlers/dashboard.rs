//! Dashboard handlers.

use axum::Json;
use axum::extract::State;

use stockhub_service::dashboard::DashboardStats;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardStats>>, ApiError> {
    let stats = state.dashboard_service.stats(&auth).await?;
    Ok(Json(ApiResponse::ok(stats)))
}
