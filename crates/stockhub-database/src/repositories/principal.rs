//! Principal repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stockhub_core::error::{AppError, ErrorKind};
use stockhub_core::result::AppResult;
use stockhub_entity::principal::{Principal, PrincipalRole};

/// Repository for principal lookups.
#[derive(Debug, Clone)]
pub struct PrincipalRepository {
    pool: PgPool,
}

impl PrincipalRepository {
    /// Create a new principal repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a principal by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Principal>> {
        sqlx::query_as::<_, Principal>("SELECT * FROM principals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find principal", e)
            })
    }

    /// Find a principal by login email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Principal>> {
        sqlx::query_as::<_, Principal>("SELECT * FROM principals WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find principal by email", e)
            })
    }

    /// List the IDs of all active principals holding a given role.
    ///
    /// Used by forwarding to fan a notification out to every admin.
    pub async fn find_active_ids_by_role(&self, role: PrincipalRole) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM principals WHERE role = $1 AND active ORDER BY created_at",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list principals by role", e)
        })
    }
}
