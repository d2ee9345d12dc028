//! Notification repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stockhub_core::error::{AppError, ErrorKind};
use stockhub_core::result::AppResult;
use stockhub_core::types::pagination::{PageRequest, PageResponse};
use stockhub_entity::notification::{CreateNotification, Notification, NotificationKind};
use stockhub_entity::principal::PrincipalRole;

/// Repository for notification CRUD operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List notifications for a principal, newest first.
    pub async fn find_by_principal(
        &self,
        principal_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE principal_id = $1")
                .bind(principal_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count notifications", e)
                })?;

        let notifs = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE principal_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(principal_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })?;

        Ok(PageResponse::new(
            notifs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// The most recent unread notifications for a principal.
    pub async fn find_recent_unread(
        &self,
        principal_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE principal_id = $1 AND read = FALSE \
             ORDER BY created_at DESC LIMIT $2",
        )
        .bind(principal_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unread notifications", e)
        })
    }

    /// Count unread notifications for a principal.
    pub async fn count_unread(&self, principal_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE principal_id = $1 AND read = FALSE",
        )
        .bind(principal_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Create a notification.
    pub async fn create(&self, data: &CreateNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (principal_id, title, message, kind) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.principal_id)
        .bind(&data.title)
        .bind(&data.message)
        .bind(data.kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    /// Create one identical notification for every active principal holding
    /// a role, in a single statement. Returns the number created.
    pub async fn create_for_role(
        &self,
        role: PrincipalRole,
        title: &str,
        message: Option<&str>,
        kind: NotificationKind,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "INSERT INTO notifications (principal_id, title, message, kind) \
             SELECT id, $2, $3, $4 FROM principals WHERE role = $1 AND active",
        )
        .bind(role)
        .bind(title)
        .bind(message)
        .bind(kind)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fan out notifications", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Mark a notification as read. Idempotent: marking an already-read
    /// notification leaves it read.
    pub async fn mark_read(&self, notification_id: Uuid, principal_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET read = TRUE WHERE id = $1 AND principal_id = $2",
        )
        .bind(notification_id)
        .bind(principal_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected())
    }

    /// Mark all of a principal's unread notifications as read.
    pub async fn mark_all_read(&self, principal_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET read = TRUE WHERE principal_id = $1 AND read = FALSE",
        )
        .bind(principal_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }
}
