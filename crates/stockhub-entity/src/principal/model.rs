//! Principal entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::PrincipalRole;

/// An authenticated user of the StockHub system.
///
/// The role is assigned at account provisioning and is immutable by the
/// principal; it determines the permitted action set and row-visibility
/// scope on every request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Principal {
    /// Unique principal identifier.
    pub id: Uuid,
    /// Unique login email.
    pub email: String,
    /// Human-readable full name.
    pub full_name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assigned role.
    pub role: PrincipalRole,
    /// Whether the account may authenticate.
    pub active: bool,
    /// When the principal was created.
    pub created_at: DateTime<Utc>,
    /// When the principal was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Principal {
    /// Check if the principal can log in right now.
    pub fn can_login(&self) -> bool {
        self.active
    }

    /// Check if this principal has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
