//! Inventory request lifecycle: submission, review, forwarding, fulfillment.
//!
//! Transition rules:
//!
//! | From     | To        | Actor                  |
//! |----------|-----------|------------------------|
//! | pending  | approved  | project manager, admin |
//! | pending  | rejected  | project manager, admin |
//! | approved | completed | admin                  |
//!
//! `rejected` and `completed` are terminal. The approver fields travel
//! with the status in one guarded UPDATE, so a persistence failure or a
//! concurrent reviewer can never leave a half-applied transition.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use stockhub_auth::rbac::{self, Action};
use stockhub_core::error::AppError;
use stockhub_core::result::AppResult;
use stockhub_core::types::pagination::{PageRequest, PageResponse};
use stockhub_database::repositories::audit::AuditLogRepository;
use stockhub_database::repositories::item::ItemRepository;
use stockhub_database::repositories::notification::NotificationRepository;
use stockhub_database::repositories::request::RequestRepository;
use stockhub_entity::audit::CreateAuditLogEntry;
use stockhub_entity::notification::NotificationKind;
use stockhub_entity::principal::PrincipalRole;
use stockhub_entity::request::{
    CreateInventoryRequest, InventoryRequest, RequestStatus, RequestWithDetails,
};

use crate::context::RequestContext;

/// Annotation written by a project manager's forward action.
const PM_FORWARD_NOTE: &str = "Forwarded to admin by project manager";
/// Annotation written by an admin's forward action.
const ADMIN_FORWARD_NOTE: &str = "Forwarded for fulfillment by admin";

/// Title of the notification sent to admins on forwarding.
const FORWARD_NOTIFICATION_TITLE: &str = "New Request Forwarded";
/// Body of the notification sent to admins on forwarding.
const FORWARD_NOTIFICATION_MESSAGE: &str =
    "A project manager has forwarded an inventory request for your review.";

/// Manages the inventory request lifecycle.
#[derive(Debug, Clone)]
pub struct RequestService {
    /// Request repository.
    request_repo: Arc<RequestRepository>,
    /// Catalog repository, for submission validation.
    item_repo: Arc<ItemRepository>,
    /// Notification repository, for the forwarding fan-out.
    notification_repo: Arc<NotificationRepository>,
    /// Audit repository; every mutation appends an entry.
    audit_repo: Arc<AuditLogRepository>,
}

impl RequestService {
    /// Creates a new request service.
    pub fn new(
        request_repo: Arc<RequestRepository>,
        item_repo: Arc<ItemRepository>,
        notification_repo: Arc<NotificationRepository>,
        audit_repo: Arc<AuditLogRepository>,
    ) -> Self {
        Self {
            request_repo,
            item_repo,
            notification_repo,
            audit_repo,
        }
    }

    /// Files a new request for the acting principal.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        item_id: Uuid,
        quantity_requested: i32,
        purpose: &str,
    ) -> AppResult<InventoryRequest> {
        if !rbac::allows(ctx.role, Action::SubmitRequest) {
            return Err(AppError::authorization(
                "Only engineers can submit inventory requests",
            ));
        }
        if quantity_requested < 1 {
            return Err(AppError::validation(
                "Requested quantity must be a positive integer",
            ));
        }
        if purpose.trim().is_empty() {
            return Err(AppError::validation("A purpose is required"));
        }

        let item = self
            .item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Inventory item not found"))?;

        if !item.is_requestable() {
            return Err(AppError::validation(format!(
                "Item '{}' is not available for request",
                item.name
            )));
        }

        let request = self
            .request_repo
            .create(&CreateInventoryRequest {
                item_id,
                requested_by: ctx.principal_id,
                quantity_requested,
                purpose: purpose.trim().to_string(),
            })
            .await?;

        self.record_audit(
            ctx,
            "request.create",
            request.id,
            None,
            Some(serde_json::to_value(&request)?),
        )
        .await;

        info!(request_id = %request.id, item = %item.sku, "Inventory request submitted");
        Ok(request)
    }

    /// Lists requests visible to the acting principal, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<RequestWithDetails>> {
        if !rbac::allows(ctx.role, Action::ViewRequests) {
            return Err(AppError::authorization("Not permitted to view requests"));
        }
        let scope = rbac::scope_for_requests(ctx.role, ctx.principal_id);
        self.request_repo.list(scope, page).await
    }

    /// Lists the pending review queue (reviewers only), newest first.
    pub async fn list_pending(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<RequestWithDetails>> {
        if !rbac::allows(ctx.role, Action::ForwardRequest) {
            return Err(AppError::authorization(
                "Only project managers and admins can review pending requests",
            ));
        }
        self.request_repo.list_pending(page).await
    }

    /// Approves a pending request, setting the approver fields.
    ///
    /// When the actor is a project manager this *is* forwarding from the
    /// admins' point of view, so the admin fan-out fires here too.
    pub async fn approve(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
        notes: Option<&str>,
    ) -> AppResult<InventoryRequest> {
        if !rbac::allows(ctx.role, Action::ApproveRequest) {
            return Err(AppError::authorization(
                "Only project managers and admins can approve requests",
            ));
        }
        let request = self
            .review_transition(ctx, request_id, RequestStatus::Approved, notes)
            .await?;
        info!(request_id = %request.id, reviewer = %ctx.principal_id, "Request approved");
        Ok(request)
    }

    /// Rejects a pending request, setting the approver fields.
    pub async fn reject(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
        notes: Option<&str>,
    ) -> AppResult<InventoryRequest> {
        if !rbac::allows(ctx.role, Action::RejectRequest) {
            return Err(AppError::authorization(
                "Only project managers and admins can reject requests",
            ));
        }
        let request = self
            .review_transition(ctx, request_id, RequestStatus::Rejected, notes)
            .await?;
        info!(request_id = %request.id, reviewer = %ctx.principal_id, "Request rejected");
        Ok(request)
    }

    /// Forwards a pending request: approves it with a forwarding
    /// annotation and, when the actor is a project manager, notifies every
    /// admin principal.
    pub async fn forward(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
    ) -> AppResult<InventoryRequest> {
        if !rbac::allows(ctx.role, Action::ForwardRequest) {
            return Err(AppError::authorization(
                "Only project managers and admins can forward requests",
            ));
        }

        let note = forward_note(ctx.role);

        let request = self
            .review_transition(ctx, request_id, RequestStatus::Approved, Some(note))
            .await?;

        info!(request_id = %request.id, reviewer = %ctx.principal_id, "Request forwarded");
        Ok(request)
    }

    /// Completes an approved request (admin fulfillment step).
    pub async fn complete(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
    ) -> AppResult<InventoryRequest> {
        if !rbac::allows(ctx.role, Action::CompleteRequest) {
            return Err(AppError::authorization("Only admins can complete requests"));
        }

        let Some(request) = self.request_repo.complete(request_id).await? else {
            return Err(self.transition_refusal(request_id, RequestStatus::Completed).await);
        };

        self.record_audit(
            ctx,
            "request.complete",
            request.id,
            Some(json!({ "status": RequestStatus::Approved })),
            Some(json!({ "status": request.status })),
        )
        .await;

        info!(request_id = %request.id, "Request completed");
        Ok(request)
    }

    /// Shared pending → approved/rejected path. The repository update is
    /// guarded on `status = 'pending'`; a `None` result is translated into
    /// a not-found or conflict error.
    ///
    /// A project manager moving a request to approved notifies every admin
    /// principal; rejection and admin approval notify nobody.
    async fn review_transition(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
        to: RequestStatus,
        notes: Option<&str>,
    ) -> AppResult<InventoryRequest> {
        let updated = self
            .request_repo
            .transition_from_pending(request_id, to, ctx.principal_id, Utc::now(), notes)
            .await?;

        let Some(request) = updated else {
            return Err(self.transition_refusal(request_id, to).await);
        };

        if notifies_admins(to, ctx.role) {
            let notified = self
                .notification_repo
                .create_for_role(
                    PrincipalRole::Admin,
                    FORWARD_NOTIFICATION_TITLE,
                    Some(FORWARD_NOTIFICATION_MESSAGE),
                    NotificationKind::Info,
                )
                .await?;
            info!(request_id = %request.id, notified, "Admins notified of forwarded request");
        }

        let action = match to {
            RequestStatus::Approved => "request.approve",
            _ => "request.reject",
        };
        self.record_audit(
            ctx,
            action,
            request.id,
            Some(json!({ "status": RequestStatus::Pending })),
            Some(json!({
                "status": request.status,
                "approved_by": request.approved_by,
                "approved_date": request.approved_date,
                "notes": request.notes,
            })),
        )
        .await;

        Ok(request)
    }

    /// Explains a refused transition: missing row vs. wrong current state.
    async fn transition_refusal(&self, request_id: Uuid, to: RequestStatus) -> AppError {
        match self.request_repo.find_by_id(request_id).await {
            Ok(Some(request)) => AppError::conflict(format!(
                "Request is {} and cannot move to {}",
                request.status, to
            )),
            Ok(None) => AppError::not_found("Inventory request not found"),
            Err(e) => e,
        }
    }

    /// Appends an audit entry for a lifecycle mutation. Audit failures are
    /// logged and swallowed: the transition itself has already committed.
    async fn record_audit(
        &self,
        ctx: &RequestContext,
        action: &str,
        record_id: Uuid,
        old_values: Option<serde_json::Value>,
        new_values: Option<serde_json::Value>,
    ) {
        let entry = CreateAuditLogEntry {
            actor_id: ctx.principal_id,
            action: action.to_string(),
            table_name: "inventory_requests".to_string(),
            record_id: Some(record_id),
            old_values,
            new_values,
        };
        if let Err(e) = self.audit_repo.create(&entry).await {
            warn!(action, %record_id, error = %e, "Failed to append audit entry");
        }
    }
}

/// Annotation recorded by the forward endpoint, phrased per actor role.
fn forward_note(role: PrincipalRole) -> &'static str {
    match role {
        PrincipalRole::ProjectManager => PM_FORWARD_NOTE,
        _ => ADMIN_FORWARD_NOTE,
    }
}

/// Whether a transition fans a notification out to every admin principal:
/// only a project manager moving a request to approved does.
fn notifies_admins(to: RequestStatus, actor: PrincipalRole) -> bool {
    to == RequestStatus::Approved && actor == PrincipalRole::ProjectManager
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pm_approval_notifies_admins() {
        assert!(notifies_admins(
            RequestStatus::Approved,
            PrincipalRole::ProjectManager
        ));
        assert!(!notifies_admins(
            RequestStatus::Approved,
            PrincipalRole::Admin
        ));
        assert!(!notifies_admins(
            RequestStatus::Rejected,
            PrincipalRole::ProjectManager
        ));
        assert!(!notifies_admins(RequestStatus::Rejected, PrincipalRole::Admin));
    }

    #[test]
    fn test_forward_note_names_the_actor() {
        assert_eq!(
            forward_note(PrincipalRole::ProjectManager),
            "Forwarded to admin by project manager"
        );
        assert_eq!(
            forward_note(PrincipalRole::Admin),
            "Forwarded for fulfillment by admin"
        );
    }
}
