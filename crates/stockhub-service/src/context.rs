//! Request context carrying the authenticated principal and their role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockhub_entity::principal::{Principal, PrincipalRole};

/// Context for the current authenticated request.
///
/// Built by the API layer from the principal row loaded for this request —
/// not from token claims — and passed into every service method so that
/// each operation knows *who* is acting under *which* current role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated principal's ID.
    pub principal_id: Uuid,
    /// The principal's role as stored right now.
    pub role: PrincipalRole,
    /// The principal's full name.
    pub full_name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(principal_id: Uuid, role: PrincipalRole, full_name: String) -> Self {
        Self {
            principal_id,
            role,
            full_name,
            request_time: Utc::now(),
        }
    }

    /// Builds a context from a freshly loaded principal row.
    pub fn from_principal(principal: &Principal) -> Self {
        Self::new(principal.id, principal.role, principal.full_name.clone())
    }

    /// Returns whether the current principal is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
