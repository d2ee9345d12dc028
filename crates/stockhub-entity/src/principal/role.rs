//! Principal role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the StockHub authorization model.
///
/// Roles are not strictly ordered: engineers hold the submit-side actions
/// while project managers and admins hold the review-side ones. The full
/// role-to-action mapping lives in the `stockhub-auth` gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "principal_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PrincipalRole {
    /// Submits inventory requests and tracks their status.
    Engineer,
    /// Reviews, forwards, approves, and rejects requests.
    ProjectManager,
    /// Full access: catalog management, fulfillment, and all reviews.
    Admin,
}

impl PrincipalRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role reviews requests (project manager or admin).
    pub fn is_reviewer(&self) -> bool {
        matches!(self, Self::ProjectManager | Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engineer => "engineer",
            Self::ProjectManager => "project_manager",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for PrincipalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrincipalRole {
    type Err = stockhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "engineer" => Ok(Self::Engineer),
            "project_manager" => Ok(Self::ProjectManager),
            "admin" => Ok(Self::Admin),
            _ => Err(stockhub_core::AppError::validation(format!(
                "Invalid principal role: '{s}'. Expected one of: engineer, project_manager, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviewer_roles() {
        assert!(!PrincipalRole::Engineer.is_reviewer());
        assert!(PrincipalRole::ProjectManager.is_reviewer());
        assert!(PrincipalRole::Admin.is_reviewer());
        assert!(PrincipalRole::Admin.is_admin());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "project_manager".parse::<PrincipalRole>().unwrap(),
            PrincipalRole::ProjectManager
        );
        assert_eq!(
            "ADMIN".parse::<PrincipalRole>().unwrap(),
            PrincipalRole::Admin
        );
        assert!("supervisor".parse::<PrincipalRole>().is_err());
    }
}
