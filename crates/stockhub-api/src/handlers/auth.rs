//! Auth handlers — login, refresh, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use stockhub_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest};
use crate::dto::response::{ApiResponse, LoginResponse, PrincipalResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .principal_service
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: outcome.tokens.access_token,
        refresh_token: outcome.tokens.refresh_token,
        access_expires_at: outcome.tokens.access_expires_at,
        refresh_expires_at: outcome.tokens.refresh_expires_at,
        principal: PrincipalResponse::from(&outcome.principal),
    })))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let outcome = state.principal_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: outcome.tokens.access_token,
        refresh_token: outcome.tokens.refresh_token,
        access_expires_at: outcome.tokens.access_expires_at,
        refresh_expires_at: outcome.tokens.refresh_expires_at,
        principal: PrincipalResponse::from(&outcome.principal),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<PrincipalResponse>>, ApiError> {
    let principal = state.principal_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(PrincipalResponse::from(&principal))))
}
