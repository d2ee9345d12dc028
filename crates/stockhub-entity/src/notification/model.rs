//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// A notification delivered to one principal.
///
/// Created only as a side effect of lifecycle transitions (forwarding),
/// never by the recipient.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient principal.
    pub principal_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text (optional).
    pub message: Option<String>,
    /// Severity/category.
    pub kind: NotificationKind,
    /// Whether the recipient has read this notification.
    pub read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification is still unread.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}

/// Data required to create a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// The recipient principal.
    pub principal_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Body text (optional).
    pub message: Option<String>,
    /// Severity/category.
    pub kind: NotificationKind,
}
