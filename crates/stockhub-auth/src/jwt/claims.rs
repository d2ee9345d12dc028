//! JWT claims structure used in access and refresh tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockhub_entity::principal::PrincipalRole;

/// JWT claims payload embedded in every token.
///
/// The embedded role is a snapshot from token issuance; privileged actions
/// re-resolve the role from the principals table, so a stale claim can
/// never outlive a role change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the principal ID.
    pub sub: Uuid,
    /// Principal role at the time of token issuance.
    pub role: PrincipalRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token for obtaining new access tokens.
    Refresh,
}

impl Claims {
    /// Returns the principal ID from the subject claim.
    pub fn principal_id(&self) -> Uuid {
        self.sub
    }
}
