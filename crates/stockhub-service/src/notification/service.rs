//! Notification listing and read-state management.
//!
//! Every operation is implicitly scoped to the acting principal: the
//! repository predicates carry the principal ID, so one recipient can
//! never read or mutate another's notifications.

use std::sync::Arc;

use uuid::Uuid;

use stockhub_core::error::AppError;
use stockhub_core::result::AppResult;
use stockhub_core::types::pagination::{PageRequest, PageResponse};
use stockhub_database::repositories::notification::NotificationRepository;
use stockhub_entity::notification::Notification;

use crate::context::RequestContext;

/// Manages a principal's notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Lists the acting principal's notifications, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.notification_repo
            .find_by_principal(ctx.principal_id, page)
            .await
    }

    /// Counts the acting principal's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notification_repo.count_unread(ctx.principal_id).await
    }

    /// Marks one notification as read. Idempotent: re-marking an
    /// already-read notification leaves it read.
    pub async fn mark_read(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        let updated = self
            .notification_repo
            .mark_read(notification_id, ctx.principal_id)
            .await?;
        if updated == 0 {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Marks all of the acting principal's notifications as read and
    /// returns how many changed.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.notification_repo
            .mark_all_read(ctx.principal_id)
            .await
    }
}
