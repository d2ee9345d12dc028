//! Inventory request repository implementation.
//!
//! Lifecycle transitions are single `UPDATE` statements guarded by the
//! expected current status, so the status and approver fields always move
//! together and a concurrently transitioned row is never overwritten.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use stockhub_auth::rbac::VisibilityScope;
use stockhub_core::error::{AppError, ErrorKind};
use stockhub_core::result::AppResult;
use stockhub_core::types::pagination::{PageRequest, PageResponse};
use stockhub_entity::request::{
    CreateInventoryRequest, InventoryRequest, RequestStatus, RequestWithDetails,
};

/// Columns for the joined listing shape.
const DETAIL_COLUMNS: &str = "r.id, r.item_id, r.requested_by, r.quantity_requested, r.purpose, \
     r.status, r.request_date, r.approved_by, r.approved_date, r.notes, \
     i.name AS item_name, i.sku AS item_sku, \
     p.full_name AS requester_name, a.full_name AS approver_name";

/// Joins for the listing shape.
const DETAIL_JOINS: &str = "FROM inventory_requests r \
     JOIN inventory_items i ON i.id = r.item_id \
     JOIN principals p ON p.id = r.requested_by \
     LEFT JOIN principals a ON a.id = r.approved_by";

/// Repository for inventory request persistence.
#[derive(Debug, Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    /// Create a new request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// File a new request. Status starts at `pending` with no approver.
    pub async fn create(&self, data: &CreateInventoryRequest) -> AppResult<InventoryRequest> {
        sqlx::query_as::<_, InventoryRequest>(
            "INSERT INTO inventory_requests (item_id, requested_by, quantity_requested, purpose) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.item_id)
        .bind(data.requested_by)
        .bind(data.quantity_requested)
        .bind(&data.purpose)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create request", e))
    }

    /// Find a request by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<InventoryRequest>> {
        sqlx::query_as::<_, InventoryRequest>("SELECT * FROM inventory_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find request", e))
    }

    /// List requests in the joined shape, newest first, within a scope.
    pub async fn list(
        &self,
        scope: VisibilityScope,
        page: &PageRequest,
    ) -> AppResult<PageResponse<RequestWithDetails>> {
        let (total, requests) = match scope {
            VisibilityScope::Own(principal_id) => {
                let total: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM inventory_requests WHERE requested_by = $1",
                )
                .bind(principal_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count requests", e)
                })?;

                let sql = format!(
                    "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} \
                     WHERE r.requested_by = $1 \
                     ORDER BY r.request_date DESC LIMIT $2 OFFSET $3"
                );
                let requests = sqlx::query_as::<_, RequestWithDetails>(&sql)
                    .bind(principal_id)
                    .bind(page.limit() as i64)
                    .bind(page.offset() as i64)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to list requests", e)
                    })?;

                (total, requests)
            }
            VisibilityScope::All => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_requests")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to count requests", e)
                    })?;

                let sql = format!(
                    "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} \
                     ORDER BY r.request_date DESC LIMIT $1 OFFSET $2"
                );
                let requests = sqlx::query_as::<_, RequestWithDetails>(&sql)
                    .bind(page.limit() as i64)
                    .bind(page.offset() as i64)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to list requests", e)
                    })?;

                (total, requests)
            }
        };

        Ok(PageResponse::new(
            requests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List pending requests in the joined shape, newest first.
    pub async fn list_pending(
        &self,
        page: &PageRequest,
    ) -> AppResult<PageResponse<RequestWithDetails>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM inventory_requests WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count pending requests", e)
                })?;

        let sql = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} \
             WHERE r.status = 'pending' \
             ORDER BY r.request_date DESC LIMIT $1 OFFSET $2"
        );
        let requests = sqlx::query_as::<_, RequestWithDetails>(&sql)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list pending requests", e)
            })?;

        Ok(PageResponse::new(
            requests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Move a pending request to `approved` or `rejected`, setting the
    /// approver fields in the same statement.
    ///
    /// Returns `None` when the row does not exist or is no longer pending —
    /// the status predicate doubles as a compare-and-swap, so a concurrent
    /// reviewer cannot be overwritten and the row never partially updates.
    pub async fn transition_from_pending(
        &self,
        id: Uuid,
        to: RequestStatus,
        approved_by: Uuid,
        approved_date: DateTime<Utc>,
        notes: Option<&str>,
    ) -> AppResult<Option<InventoryRequest>> {
        sqlx::query_as::<_, InventoryRequest>(
            "UPDATE inventory_requests \
             SET status = $2, approved_by = $3, approved_date = $4, notes = COALESCE($5, notes) \
             WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .bind(to)
        .bind(approved_by)
        .bind(approved_date)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to transition request", e))
    }

    /// Move an approved request to `completed`. The approver fields are
    /// left as set by the review transition.
    pub async fn complete(&self, id: Uuid) -> AppResult<Option<InventoryRequest>> {
        sqlx::query_as::<_, InventoryRequest>(
            "UPDATE inventory_requests SET status = 'completed' \
             WHERE id = $1 AND status = 'approved' RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to complete request", e))
    }

    /// Count requests grouped by status, within a scope.
    pub async fn count_by_status(
        &self,
        scope: VisibilityScope,
    ) -> AppResult<Vec<(RequestStatus, i64)>> {
        let result = match scope {
            VisibilityScope::Own(principal_id) => {
                sqlx::query_as::<_, (RequestStatus, i64)>(
                    "SELECT status, COUNT(*) FROM inventory_requests \
                     WHERE requested_by = $1 GROUP BY status",
                )
                .bind(principal_id)
                .fetch_all(&self.pool)
                .await
            }
            VisibilityScope::All => {
                sqlx::query_as::<_, (RequestStatus, i64)>(
                    "SELECT status, COUNT(*) FROM inventory_requests GROUP BY status",
                )
                .fetch_all(&self.pool)
                .await
            }
        };

        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count requests", e))
    }
}
