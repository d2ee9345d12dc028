//! Catalog item handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use stockhub_core::error::AppError;
use stockhub_entity::item::{CreateInventoryItem, InventoryItem, ItemStatus, UpdateInventoryItem};

use crate::dto::request::{CreateItemRequest, ItemSearchParams, UpdateItemRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/items
pub async fn search_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<ItemSearchParams>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .catalog_service
        .search(
            &auth,
            filters.q.as_deref(),
            filters.status,
            &params.into_page_request(),
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/items/available
pub async fn list_available_items(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<InventoryItem>>>, ApiError> {
    let items = state.catalog_service.list_requestable(&auth).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateItemRequest>,
) -> Result<Json<ApiResponse<InventoryItem>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let item = state
        .catalog_service
        .create(
            &auth,
            CreateInventoryItem {
                name: req.name,
                sku: req.sku,
                category: req.category,
                quantity: req.quantity,
                unit_price: req.unit_price,
                location: req.location,
                status: req.status.unwrap_or(ItemStatus::Available),
                description: req.description,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(item)))
}

/// PUT /api/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ApiResponse<InventoryItem>>, ApiError> {
    let item = state
        .catalog_service
        .update(
            &auth,
            id,
            UpdateInventoryItem {
                name: req.name,
                category: req.category,
                quantity: req.quantity,
                unit_price: req.unit_price,
                location: req.location,
                status: req.status,
                description: req.description,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(item)))
}
