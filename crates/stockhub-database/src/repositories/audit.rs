//! Audit log repository implementation.
//!
//! The audit log is append-only: this repository exposes create and read
//! operations and nothing else.

use sqlx::PgPool;

use stockhub_auth::rbac::VisibilityScope;
use stockhub_core::error::{AppError, ErrorKind};
use stockhub_core::result::AppResult;
use stockhub_core::types::pagination::{PageRequest, PageResponse};
use stockhub_entity::audit::{AuditLogEntry, AuditLogWithActor, CreateAuditLogEntry};

/// Repository for audit log entries.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an audit log entry.
    pub async fn create(&self, data: &CreateAuditLogEntry) -> AppResult<AuditLogEntry> {
        sqlx::query_as::<_, AuditLogEntry>(
            "INSERT INTO audit_log (actor_id, action, table_name, record_id, old_values, new_values) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.actor_id)
        .bind(&data.action)
        .bind(&data.table_name)
        .bind(data.record_id)
        .bind(&data.old_values)
        .bind(&data.new_values)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create audit entry", e))
    }

    /// List audit entries joined with the actor's name, newest first,
    /// within a scope.
    pub async fn list(
        &self,
        scope: VisibilityScope,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLogWithActor>> {
        let (total, entries) = match scope {
            VisibilityScope::Own(principal_id) => {
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM audit_log WHERE actor_id = $1")
                        .bind(principal_id)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| {
                            AppError::with_source(
                                ErrorKind::Database,
                                "Failed to count audit entries",
                                e,
                            )
                        })?;

                let entries = sqlx::query_as::<_, AuditLogWithActor>(
                    "SELECT l.*, p.full_name AS actor_name FROM audit_log l \
                     JOIN principals p ON p.id = l.actor_id \
                     WHERE l.actor_id = $1 \
                     ORDER BY l.created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(principal_id)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list audit entries", e)
                })?;

                (total, entries)
            }
            VisibilityScope::All => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM audit_log")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Database,
                            "Failed to count audit entries",
                            e,
                        )
                    })?;

                let entries = sqlx::query_as::<_, AuditLogWithActor>(
                    "SELECT l.*, p.full_name AS actor_name FROM audit_log l \
                     JOIN principals p ON p.id = l.actor_id \
                     ORDER BY l.created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list audit entries", e)
                })?;

                (total, entries)
            }
        };

        Ok(PageResponse::new(
            entries,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
