//! Role → row-visibility scope mapping.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockhub_entity::principal::PrincipalRole;

/// The subset of rows a principal may read from a listing surface.
///
/// Repositories take a scope and compose the SQL predicate themselves, so
/// a scoped role cannot reach unscoped rows through any caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityScope {
    /// Only rows owned by the given principal.
    Own(Uuid),
    /// Every row in the collection.
    All,
}

impl VisibilityScope {
    /// Check whether a row owned by `owner` is visible under this scope.
    pub fn permits(&self, owner: Uuid) -> bool {
        match self {
            Self::Own(principal_id) => *principal_id == owner,
            Self::All => true,
        }
    }
}

/// Scope for request listings: engineers see their own requests,
/// project managers and admins see all.
pub fn scope_for_requests(role: PrincipalRole, principal_id: Uuid) -> VisibilityScope {
    match role {
        PrincipalRole::Engineer => VisibilityScope::Own(principal_id),
        PrincipalRole::ProjectManager | PrincipalRole::Admin => VisibilityScope::All,
    }
}

/// Scope for audit log listings: engineers see entries they produced,
/// project managers and admins see all.
pub fn scope_for_audit(role: PrincipalRole, principal_id: Uuid) -> VisibilityScope {
    match role {
        PrincipalRole::Engineer => VisibilityScope::Own(principal_id),
        PrincipalRole::ProjectManager | PrincipalRole::Admin => VisibilityScope::All,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineer_scope_is_own_rows_only() {
        let me = Uuid::new_v4();
        let someone_else = Uuid::new_v4();

        let scope = scope_for_requests(PrincipalRole::Engineer, me);
        assert_eq!(scope, VisibilityScope::Own(me));
        assert!(scope.permits(me));
        assert!(!scope.permits(someone_else));
    }

    #[test]
    fn test_reviewers_see_everything() {
        let me = Uuid::new_v4();
        for role in [PrincipalRole::ProjectManager, PrincipalRole::Admin] {
            assert_eq!(scope_for_requests(role, me), VisibilityScope::All);
            assert_eq!(scope_for_audit(role, me), VisibilityScope::All);
        }
    }

    #[test]
    fn test_audit_scope_matches_request_scope_for_engineers() {
        let me = Uuid::new_v4();
        assert_eq!(
            scope_for_audit(PrincipalRole::Engineer, me),
            VisibilityScope::Own(me)
        );
    }
}
