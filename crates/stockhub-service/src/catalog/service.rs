//! Catalog management: admin-only mutation and listing, plus the
//! requestable-item view used by the request form.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use stockhub_auth::rbac::{self, Action};
use stockhub_core::error::AppError;
use stockhub_core::result::AppResult;
use stockhub_core::types::pagination::{PageRequest, PageResponse};
use stockhub_database::repositories::audit::AuditLogRepository;
use stockhub_database::repositories::item::ItemRepository;
use stockhub_entity::audit::CreateAuditLogEntry;
use stockhub_entity::item::{CreateInventoryItem, InventoryItem, ItemStatus, UpdateInventoryItem};

use crate::context::RequestContext;

/// Manages the inventory catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Catalog repository.
    item_repo: Arc<ItemRepository>,
    /// Audit repository; catalog mutations append entries with snapshots.
    audit_repo: Arc<AuditLogRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(item_repo: Arc<ItemRepository>, audit_repo: Arc<AuditLogRepository>) -> Self {
        Self {
            item_repo,
            audit_repo,
        }
    }

    /// Searches the full catalog (admin only).
    pub async fn search(
        &self,
        ctx: &RequestContext,
        term: Option<&str>,
        status: Option<ItemStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<InventoryItem>> {
        if !rbac::allows(ctx.role, Action::ViewCatalog) {
            return Err(AppError::authorization(
                "Only admins can view the full catalog",
            ));
        }
        self.item_repo.search(term, status, page).await
    }

    /// Lists items that can currently be requested. Available to every
    /// authenticated principal — this backs the request form.
    pub async fn list_requestable(&self, _ctx: &RequestContext) -> AppResult<Vec<InventoryItem>> {
        self.item_repo.list_requestable().await
    }

    /// Adds a new item to the catalog (admin only).
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateInventoryItem,
    ) -> AppResult<InventoryItem> {
        if !rbac::allows(ctx.role, Action::ManageCatalog) {
            return Err(AppError::authorization("Only admins can add catalog items"));
        }
        validate_item_fields(&data.name, &data.sku, data.quantity, data.unit_price)?;

        let item = self.item_repo.create(&data).await?;

        self.record_audit(
            ctx,
            "item.create",
            item.id,
            None,
            Some(serde_json::to_value(&item)?),
        )
        .await;

        info!(item_id = %item.id, sku = %item.sku, "Catalog item created");
        Ok(item)
    }

    /// Updates an existing catalog item (admin only).
    pub async fn update(
        &self,
        ctx: &RequestContext,
        item_id: Uuid,
        data: UpdateInventoryItem,
    ) -> AppResult<InventoryItem> {
        if !rbac::allows(ctx.role, Action::ManageCatalog) {
            return Err(AppError::authorization(
                "Only admins can update catalog items",
            ));
        }
        if let Some(quantity) = data.quantity {
            if quantity < 0 {
                return Err(AppError::validation("Quantity cannot be negative"));
            }
        }
        if let Some(price) = data.unit_price {
            if price < 0.0 {
                return Err(AppError::validation("Unit price cannot be negative"));
            }
        }

        let old = self
            .item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Inventory item not found"))?;

        let updated = self
            .item_repo
            .update(item_id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Inventory item not found"))?;

        self.record_audit(
            ctx,
            "item.update",
            updated.id,
            Some(serde_json::to_value(&old)?),
            Some(serde_json::to_value(&updated)?),
        )
        .await;

        info!(item_id = %updated.id, "Catalog item updated");
        Ok(updated)
    }

    /// Appends a catalog audit entry; failures are logged and swallowed.
    async fn record_audit(
        &self,
        ctx: &RequestContext,
        action: &str,
        record_id: Uuid,
        old_values: Option<serde_json::Value>,
        new_values: Option<serde_json::Value>,
    ) {
        let entry = CreateAuditLogEntry {
            actor_id: ctx.principal_id,
            action: action.to_string(),
            table_name: "inventory_items".to_string(),
            record_id: Some(record_id),
            old_values,
            new_values,
        };
        if let Err(e) = self.audit_repo.create(&entry).await {
            warn!(action, %record_id, error = %e, "Failed to append audit entry");
        }
    }
}

/// Field validation shared by item creation.
fn validate_item_fields(
    name: &str,
    sku: &str,
    quantity: i32,
    unit_price: Option<f64>,
) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Item name is required"));
    }
    if sku.trim().is_empty() {
        return Err(AppError::validation("SKU is required"));
    }
    if quantity < 0 {
        return Err(AppError::validation("Quantity cannot be negative"));
    }
    if let Some(price) = unit_price {
        if price < 0.0 {
            return Err(AppError::validation("Unit price cannot be negative"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_field_validation() {
        assert!(validate_item_fields("Scope", "OSC-1", 0, None).is_ok());
        assert!(validate_item_fields("", "OSC-1", 0, None).is_err());
        assert!(validate_item_fields("Scope", "  ", 0, None).is_err());
        assert!(validate_item_fields("Scope", "OSC-1", -1, None).is_err());
        assert!(validate_item_fields("Scope", "OSC-1", 1, Some(-0.5)).is_err());
        assert!(validate_item_fields("Scope", "OSC-1", 1, Some(12.5)).is_ok());
    }
}
