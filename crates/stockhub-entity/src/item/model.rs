//! Inventory item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ItemStatus;

/// A catalog item that principals can request.
///
/// Mutated only by admin actions; quantity never goes negative.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// Item display name.
    pub name: String,
    /// Stock-keeping unit (unique).
    pub sku: String,
    /// Item category (optional).
    pub category: Option<String>,
    /// Units currently in stock.
    pub quantity: i32,
    /// Price per unit (optional).
    pub unit_price: Option<f64>,
    /// Physical storage location (optional).
    pub location: Option<String>,
    /// Availability status.
    pub status: ItemStatus,
    /// Free-text description (optional).
    pub description: Option<String>,
    /// When the item was added to the catalog.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Check if the item can currently be requested.
    pub fn is_requestable(&self) -> bool {
        self.status.is_requestable() && self.quantity > 0
    }
}

/// Data required to add a new catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInventoryItem {
    /// Item display name.
    pub name: String,
    /// Stock-keeping unit.
    pub sku: String,
    /// Category (optional).
    pub category: Option<String>,
    /// Initial stock quantity.
    pub quantity: i32,
    /// Price per unit (optional).
    pub unit_price: Option<f64>,
    /// Storage location (optional).
    pub location: Option<String>,
    /// Initial status.
    pub status: ItemStatus,
    /// Description (optional).
    pub description: Option<String>,
}

/// Data for updating an existing catalog item.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInventoryItem {
    /// New display name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New stock quantity.
    pub quantity: Option<i32>,
    /// New unit price.
    pub unit_price: Option<f64>,
    /// New storage location.
    pub location: Option<String>,
    /// New status.
    pub status: Option<ItemStatus>,
    /// New description.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status: ItemStatus, quantity: i32) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            name: "Oscilloscope".to_string(),
            sku: "OSC-1001".to_string(),
            category: Some("Test Equipment".to_string()),
            quantity,
            unit_price: Some(1250.0),
            location: Some("Shelf B2".to_string()),
            status,
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_requestable_requires_stock_and_status() {
        assert!(item(ItemStatus::Available, 3).is_requestable());
        assert!(!item(ItemStatus::Available, 0).is_requestable());
        assert!(!item(ItemStatus::Maintenance, 3).is_requestable());
    }
}
