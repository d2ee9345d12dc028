//! Inventory request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::RequestStatus;

/// A request by a principal for units of a catalog item.
///
/// The requester is immutable after creation. The approver fields are set
/// together, exactly once, by the transition out of `pending`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The requested catalog item.
    pub item_id: Uuid,
    /// The principal who filed the request.
    pub requested_by: Uuid,
    /// Number of units requested (positive).
    pub quantity_requested: i32,
    /// Why the item is needed.
    pub purpose: String,
    /// Current lifecycle state.
    pub status: RequestStatus,
    /// When the request was filed (immutable).
    pub request_date: DateTime<Utc>,
    /// The reviewer who moved the request out of `pending`.
    pub approved_by: Option<Uuid>,
    /// When the request left `pending`.
    pub approved_date: Option<DateTime<Utc>>,
    /// Reviewer notes (e.g., the forwarding annotation).
    pub notes: Option<String>,
}

impl InventoryRequest {
    /// Check the approver-field invariant: `approved_by` and
    /// `approved_date` are both null exactly while the request is pending.
    pub fn approval_metadata_consistent(&self) -> bool {
        let unset = self.approved_by.is_none() && self.approved_date.is_none();
        let set = self.approved_by.is_some() && self.approved_date.is_some();
        match self.status {
            RequestStatus::Pending => unset,
            _ => set,
        }
    }
}

/// Data required to file a new inventory request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInventoryRequest {
    /// The catalog item being requested.
    pub item_id: Uuid,
    /// The requesting principal.
    pub requested_by: Uuid,
    /// Units requested.
    pub quantity_requested: i32,
    /// Free-text purpose.
    pub purpose: String,
}

/// A request row joined with its item and principal names, the shape used
/// by every request listing surface.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RequestWithDetails {
    /// Unique request identifier.
    pub id: Uuid,
    /// The requested catalog item.
    pub item_id: Uuid,
    /// The principal who filed the request.
    pub requested_by: Uuid,
    /// Number of units requested.
    pub quantity_requested: i32,
    /// Why the item is needed.
    pub purpose: String,
    /// Current lifecycle state.
    pub status: RequestStatus,
    /// When the request was filed.
    pub request_date: DateTime<Utc>,
    /// The reviewer who moved the request out of `pending`.
    pub approved_by: Option<Uuid>,
    /// When the request left `pending`.
    pub approved_date: Option<DateTime<Utc>>,
    /// Reviewer notes.
    pub notes: Option<String>,
    /// Joined item name.
    pub item_name: String,
    /// Joined item SKU.
    pub item_sku: String,
    /// Joined requester full name.
    pub requester_name: String,
    /// Joined approver full name, when an approver exists.
    pub approver_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: RequestStatus) -> InventoryRequest {
        InventoryRequest {
            id: Uuid::new_v4(),
            item_id: Uuid::new_v4(),
            requested_by: Uuid::new_v4(),
            quantity_requested: 5,
            purpose: "Bench setup for the rig".to_string(),
            status,
            request_date: Utc::now(),
            approved_by: None,
            approved_date: None,
            notes: None,
        }
    }

    #[test]
    fn test_pending_request_has_no_approval_metadata() {
        assert!(request(RequestStatus::Pending).approval_metadata_consistent());
    }

    #[test]
    fn test_reviewed_request_requires_both_approver_fields() {
        let mut req = request(RequestStatus::Approved);
        assert!(!req.approval_metadata_consistent());

        req.approved_by = Some(Uuid::new_v4());
        assert!(!req.approval_metadata_consistent());

        req.approved_date = Some(Utc::now());
        assert!(req.approval_metadata_consistent());
    }

    #[test]
    fn test_pending_request_with_approver_violates_invariant() {
        let mut req = request(RequestStatus::Pending);
        req.approved_by = Some(Uuid::new_v4());
        req.approved_date = Some(Utc::now());
        assert!(!req.approval_metadata_consistent());
    }
}
