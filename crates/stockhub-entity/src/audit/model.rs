//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable audit log entry recording a principal's action.
///
/// Entries are append-only: there is no update or delete path anywhere in
/// the application.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: Uuid,
    /// The principal who performed the action.
    pub actor_id: Uuid,
    /// The action that was performed (e.g., `"request.approve"`).
    pub action: String,
    /// The table the action targeted.
    pub table_name: String,
    /// The targeted row ID (if applicable).
    pub record_id: Option<Uuid>,
    /// Snapshot of the row before the action (JSON).
    pub old_values: Option<serde_json::Value>,
    /// Snapshot of the row after the action (JSON).
    pub new_values: Option<serde_json::Value>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// An audit entry joined with the actor's full name, the shape used by the
/// audit listing surface.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogWithActor {
    /// Unique audit entry identifier.
    pub id: Uuid,
    /// The principal who performed the action.
    pub actor_id: Uuid,
    /// The action that was performed.
    pub action: String,
    /// The table the action targeted.
    pub table_name: String,
    /// The targeted row ID (if applicable).
    pub record_id: Option<Uuid>,
    /// Snapshot of the row before the action.
    pub old_values: Option<serde_json::Value>,
    /// Snapshot of the row after the action.
    pub new_values: Option<serde_json::Value>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
    /// Joined actor full name.
    pub actor_name: String,
}

/// Data required to append a new audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditLogEntry {
    /// The principal who performed the action.
    pub actor_id: Uuid,
    /// The action performed.
    pub action: String,
    /// Targeted table name.
    pub table_name: String,
    /// Targeted row ID.
    pub record_id: Option<Uuid>,
    /// Snapshot before the action.
    pub old_values: Option<serde_json::Value>,
    /// Snapshot after the action.
    pub new_values: Option<serde_json::Value>,
}
