//! Dashboard stat tiles: catalog and request counts plus recent
//! notifications.
//!
//! Request counts are computed over the role-scoped set — an engineer's
//! tiles count only their own requests.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stockhub_auth::rbac;
use stockhub_core::result::AppResult;
use stockhub_database::repositories::item::ItemRepository;
use stockhub_database::repositories::notification::NotificationRepository;
use stockhub_database::repositories::request::RequestRepository;
use stockhub_entity::item::ItemStatus;
use stockhub_entity::notification::Notification;
use stockhub_entity::request::RequestStatus;

use crate::context::RequestContext;

/// How many recent unread notifications the dashboard shows.
const RECENT_NOTIFICATION_LIMIT: i64 = 3;

/// Catalog item counts per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatusCounts {
    /// Items ready for request.
    pub available: i64,
    /// Items held against approved requests.
    pub reserved: i64,
    /// Items with no stock.
    pub out_of_stock: i64,
    /// Items under maintenance.
    pub maintenance: i64,
}

impl From<Vec<(ItemStatus, i64)>> for ItemStatusCounts {
    fn from(rows: Vec<(ItemStatus, i64)>) -> Self {
        let mut counts = Self::default();
        for (status, count) in rows {
            match status {
                ItemStatus::Available => counts.available = count,
                ItemStatus::Reserved => counts.reserved = count,
                ItemStatus::OutOfStock => counts.out_of_stock = count,
                ItemStatus::Maintenance => counts.maintenance = count,
            }
        }
        counts
    }
}

/// Request counts per lifecycle state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStatusCounts {
    /// Requests awaiting review.
    pub pending: i64,
    /// Requests awaiting fulfillment.
    pub approved: i64,
    /// Declined requests.
    pub rejected: i64,
    /// Fulfilled requests.
    pub completed: i64,
}

impl From<Vec<(RequestStatus, i64)>> for RequestStatusCounts {
    fn from(rows: Vec<(RequestStatus, i64)>) -> Self {
        let mut counts = Self::default();
        for (status, count) in rows {
            match status {
                RequestStatus::Pending => counts.pending = count,
                RequestStatus::Approved => counts.approved = count,
                RequestStatus::Rejected => counts.rejected = count,
                RequestStatus::Completed => counts.completed = count,
            }
        }
        counts
    }
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Catalog counts by status.
    pub items: ItemStatusCounts,
    /// Request counts by status, over the role-scoped set.
    pub requests: RequestStatusCounts,
    /// Unread notification count for the acting principal.
    pub unread_notifications: i64,
    /// Most recent unread notifications for the acting principal.
    pub recent_notifications: Vec<Notification>,
}

/// Computes dashboard statistics.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Catalog repository.
    item_repo: Arc<ItemRepository>,
    /// Request repository.
    request_repo: Arc<RequestRepository>,
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        item_repo: Arc<ItemRepository>,
        request_repo: Arc<RequestRepository>,
        notification_repo: Arc<NotificationRepository>,
    ) -> Self {
        Self {
            item_repo,
            request_repo,
            notification_repo,
        }
    }

    /// Gathers the stat tiles for the acting principal.
    pub async fn stats(&self, ctx: &RequestContext) -> AppResult<DashboardStats> {
        let items = self.item_repo.count_by_status().await?.into();

        let scope = rbac::scope_for_requests(ctx.role, ctx.principal_id);
        let requests = self.request_repo.count_by_status(scope).await?.into();

        let unread_notifications = self
            .notification_repo
            .count_unread(ctx.principal_id)
            .await?;
        let recent_notifications = self
            .notification_repo
            .find_recent_unread(ctx.principal_id, RECENT_NOTIFICATION_LIMIT)
            .await?;

        Ok(DashboardStats {
            items,
            requests,
            unread_notifications,
            recent_notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_counts_from_rows() {
        let counts: ItemStatusCounts = vec![
            (ItemStatus::Available, 7),
            (ItemStatus::OutOfStock, 2),
        ]
        .into();
        assert_eq!(counts.available, 7);
        assert_eq!(counts.out_of_stock, 2);
        assert_eq!(counts.reserved, 0);
        assert_eq!(counts.maintenance, 0);
    }

    #[test]
    fn test_request_counts_from_rows() {
        let counts: RequestStatusCounts = vec![
            (RequestStatus::Pending, 4),
            (RequestStatus::Approved, 1),
            (RequestStatus::Completed, 9),
        ]
        .into();
        assert_eq!(counts.pending, 4);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.rejected, 0);
        assert_eq!(counts.completed, 9);
    }
}
