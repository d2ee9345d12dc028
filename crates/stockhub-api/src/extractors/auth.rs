//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! validates it, and reloads the principal row.
//!
//! The role used for authorization is the one stored in the principals
//! table *right now*, not the token claim, so a role change or
//! deactivation takes effect on the very next request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use stockhub_core::error::AppError;
use stockhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated principal context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode_access_token(token)?;

        let principal = state
            .principal_repo
            .find_by_id(claims.principal_id())
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        if !principal.can_login() {
            return Err(ApiError(AppError::authentication("Account is deactivated")));
        }

        Ok(AuthUser(RequestContext::from_principal(&principal)))
    }
}
