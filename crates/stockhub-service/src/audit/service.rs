//! Audit trail listing, scoped by role.

use std::sync::Arc;

use stockhub_auth::rbac::{self, Action};
use stockhub_core::error::AppError;
use stockhub_core::result::AppResult;
use stockhub_core::types::pagination::{PageRequest, PageResponse};
use stockhub_database::repositories::audit::AuditLogRepository;
use stockhub_entity::audit::AuditLogWithActor;

use crate::context::RequestContext;

/// Read access to the audit trail.
#[derive(Debug, Clone)]
pub struct AuditService {
    /// Audit repository.
    audit_repo: Arc<AuditLogRepository>,
}

impl AuditService {
    /// Creates a new audit service.
    pub fn new(audit_repo: Arc<AuditLogRepository>) -> Self {
        Self { audit_repo }
    }

    /// Lists audit entries visible to the acting principal, newest first.
    /// Engineers see only entries they produced; reviewers see all.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLogWithActor>> {
        if !rbac::allows(ctx.role, Action::ViewAuditLog) {
            return Err(AppError::authorization("Not permitted to view audit logs"));
        }
        let scope = rbac::scope_for_audit(ctx.role, ctx.principal_id);
        self.audit_repo.list(scope, page).await
    }
}
