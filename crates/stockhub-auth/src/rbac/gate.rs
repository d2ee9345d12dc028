//! Role → permitted action mapping.

use serde::{Deserialize, Serialize};

use stockhub_entity::principal::PrincipalRole;

/// An action a principal may attempt against the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// File a new inventory request.
    SubmitRequest,
    /// List inventory requests (subject to visibility scope).
    ViewRequests,
    /// Move a pending request to approved.
    ApproveRequest,
    /// Move a pending request to rejected.
    RejectRequest,
    /// Approve a pending request with a forwarding annotation,
    /// notifying admins for further action.
    ForwardRequest,
    /// Move an approved request to completed (fulfillment).
    CompleteRequest,
    /// List the full catalog.
    ViewCatalog,
    /// Create or update catalog items.
    ManageCatalog,
    /// List audit log entries (subject to visibility scope).
    ViewAuditLog,
}

/// Actions available to engineers.
const ENGINEER_ACTIONS: &[Action] = &[
    Action::SubmitRequest,
    Action::ViewRequests,
    Action::ViewAuditLog,
];

/// Actions available to project managers.
const PROJECT_MANAGER_ACTIONS: &[Action] = &[
    Action::ViewRequests,
    Action::ApproveRequest,
    Action::RejectRequest,
    Action::ForwardRequest,
    Action::ViewAuditLog,
];

/// Actions available to admins.
const ADMIN_ACTIONS: &[Action] = &[
    Action::ViewRequests,
    Action::ApproveRequest,
    Action::RejectRequest,
    Action::ForwardRequest,
    Action::CompleteRequest,
    Action::ViewCatalog,
    Action::ManageCatalog,
    Action::ViewAuditLog,
];

/// Return the full action set permitted to a role.
pub fn permitted_actions(role: PrincipalRole) -> &'static [Action] {
    match role {
        PrincipalRole::Engineer => ENGINEER_ACTIONS,
        PrincipalRole::ProjectManager => PROJECT_MANAGER_ACTIONS,
        PrincipalRole::Admin => ADMIN_ACTIONS,
    }
}

/// Check whether a role may attempt an action.
pub fn allows(role: PrincipalRole, action: Action) -> bool {
    permitted_actions(role).contains(&action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineer_submits_but_never_reviews() {
        assert!(allows(PrincipalRole::Engineer, Action::SubmitRequest));
        assert!(allows(PrincipalRole::Engineer, Action::ViewRequests));
        assert!(allows(PrincipalRole::Engineer, Action::ViewAuditLog));

        assert!(!allows(PrincipalRole::Engineer, Action::ApproveRequest));
        assert!(!allows(PrincipalRole::Engineer, Action::RejectRequest));
        assert!(!allows(PrincipalRole::Engineer, Action::ForwardRequest));
        assert!(!allows(PrincipalRole::Engineer, Action::CompleteRequest));
    }

    #[test]
    fn test_catalog_is_admin_only() {
        assert!(allows(PrincipalRole::Admin, Action::ViewCatalog));
        assert!(allows(PrincipalRole::Admin, Action::ManageCatalog));

        assert!(!allows(PrincipalRole::Engineer, Action::ViewCatalog));
        assert!(!allows(PrincipalRole::Engineer, Action::ManageCatalog));
        assert!(!allows(PrincipalRole::ProjectManager, Action::ViewCatalog));
        assert!(!allows(PrincipalRole::ProjectManager, Action::ManageCatalog));
    }

    #[test]
    fn test_reviewers_forward_and_decide() {
        for role in [PrincipalRole::ProjectManager, PrincipalRole::Admin] {
            assert!(allows(role, Action::ApproveRequest));
            assert!(allows(role, Action::RejectRequest));
            assert!(allows(role, Action::ForwardRequest));
        }
    }

    #[test]
    fn test_completion_is_admin_only() {
        assert!(allows(PrincipalRole::Admin, Action::CompleteRequest));
        assert!(!allows(PrincipalRole::ProjectManager, Action::CompleteRequest));
        assert!(!allows(PrincipalRole::Engineer, Action::CompleteRequest));
    }
}
