//! Inventory request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use stockhub_core::error::AppError;
use stockhub_entity::request::InventoryRequest;

use crate::dto::request::{CreateRequestBody, ReviewRequestBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/requests
pub async fn submit_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateRequestBody>,
) -> Result<Json<ApiResponse<InventoryRequest>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let request = state
        .request_service
        .submit(&auth, req.item_id, req.quantity_requested, &req.purpose)
        .await?;

    Ok(Json(ApiResponse::ok(request)))
}

/// GET /api/requests
pub async fn list_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .request_service
        .list(&auth, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/requests/pending
pub async fn list_pending_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .request_service
        .list_pending(&auth, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// POST /api/requests/{id}/approve
pub async fn approve_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    body: Option<Json<ReviewRequestBody>>,
) -> Result<Json<ApiResponse<InventoryRequest>>, ApiError> {
    let notes = body.and_then(|Json(b)| b.notes);
    let request = state
        .request_service
        .approve(&auth, id, notes.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// POST /api/requests/{id}/reject
pub async fn reject_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    body: Option<Json<ReviewRequestBody>>,
) -> Result<Json<ApiResponse<InventoryRequest>>, ApiError> {
    let notes = body.and_then(|Json(b)| b.notes);
    let request = state
        .request_service
        .reject(&auth, id, notes.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// POST /api/requests/{id}/forward
pub async fn forward_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<InventoryRequest>>, ApiError> {
    let request = state.request_service.forward(&auth, id).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// POST /api/requests/{id}/complete
pub async fn complete_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<InventoryRequest>>, ApiError> {
    let request = state.request_service.complete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(request)))
}
