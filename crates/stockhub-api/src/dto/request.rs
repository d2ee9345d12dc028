//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use stockhub_entity::item::ItemStatus;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Body for filing a new inventory request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRequestBody {
    /// The catalog item being requested.
    pub item_id: Uuid,
    /// Units requested.
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity_requested: i32,
    /// Why the item is needed.
    #[validate(length(min = 1, message = "Purpose is required"))]
    pub purpose: String,
}

/// Body for approving or rejecting a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewRequestBody {
    /// Optional reviewer notes.
    pub notes: Option<String>,
}

/// Create catalog item request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemRequest {
    /// Item display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Stock-keeping unit.
    #[validate(length(min = 1, max = 100))]
    pub sku: String,
    /// Category (optional).
    pub category: Option<String>,
    /// Initial stock quantity.
    #[validate(range(min = 0))]
    pub quantity: i32,
    /// Price per unit (optional).
    pub unit_price: Option<f64>,
    /// Storage location (optional).
    pub location: Option<String>,
    /// Initial status (defaults to available).
    pub status: Option<ItemStatus>,
    /// Description (optional).
    pub description: Option<String>,
}

/// Update catalog item request (admin). `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItemRequest {
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

/// Query parameters for catalog search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSearchParams {
    /// Search term matched against name, SKU, and category.
    pub q: Option<String>,
    /// Status filter.
    pub status: Option<ItemStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_quantity_request_fails_validation() {
        let body = CreateRequestBody {
            item_id: Uuid::new_v4(),
            quantity_requested: 0,
            purpose: "Prototype assembly".to_string(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_negative_quantity_request_fails_validation() {
        let body = CreateRequestBody {
            item_id: Uuid::new_v4(),
            quantity_requested: -3,
            purpose: "Prototype assembly".to_string(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_valid_request_passes_validation() {
        let body = CreateRequestBody {
            item_id: Uuid::new_v4(),
            quantity_requested: 5,
            purpose: "Prototype assembly".to_string(),
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_login_requires_well_formed_email() {
        let body = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(body.validate().is_err());
    }
}
