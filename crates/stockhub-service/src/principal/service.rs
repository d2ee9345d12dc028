//! Account operations: login, token refresh, and profile lookup.

use std::sync::Arc;

use tracing::info;

use stockhub_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use stockhub_auth::password::PasswordHasher;
use stockhub_core::error::AppError;
use stockhub_core::result::AppResult;
use stockhub_database::repositories::principal::PrincipalRepository;
use stockhub_entity::principal::Principal;

use crate::context::RequestContext;

/// A successful login or refresh: fresh tokens plus the principal row.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The freshly issued token pair.
    pub tokens: TokenPair,
    /// The authenticated principal.
    pub principal: Principal,
}

/// Handles authentication and profile reads.
#[derive(Debug, Clone)]
pub struct PrincipalService {
    /// Principal repository.
    principal_repo: Arc<PrincipalRepository>,
    /// Password hasher/verifier.
    password_hasher: Arc<PasswordHasher>,
    /// Token encoder.
    jwt_encoder: Arc<JwtEncoder>,
    /// Token decoder, for refresh.
    jwt_decoder: Arc<JwtDecoder>,
}

impl PrincipalService {
    /// Creates a new principal service.
    pub fn new(
        principal_repo: Arc<PrincipalRepository>,
        password_hasher: Arc<PasswordHasher>,
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            principal_repo,
            password_hasher,
            jwt_encoder,
            jwt_decoder,
        }
    }

    /// Authenticates an email/password pair and issues tokens.
    ///
    /// The same error is returned for an unknown email and a wrong
    /// password, so the login surface does not leak which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let Some(principal) = self.principal_repo.find_by_email(email).await? else {
            return Err(AppError::authentication("Invalid email or password"));
        };

        if !principal.can_login() {
            return Err(AppError::authentication("Account is deactivated"));
        }

        let verified = self
            .password_hasher
            .verify_password(password, &principal.password_hash)?;
        if !verified {
            return Err(AppError::authentication("Invalid email or password"));
        }

        let tokens = self
            .jwt_encoder
            .generate_token_pair(principal.id, principal.role)?;

        info!(principal_id = %principal.id, role = %principal.role, "Principal logged in");
        Ok(LoginOutcome { tokens, principal })
    }

    /// Exchanges a refresh token for a new token pair.
    ///
    /// The principal row is reloaded so the new tokens carry the current
    /// role and a deactivated account cannot refresh its way back in.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<LoginOutcome> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;

        let Some(principal) = self.principal_repo.find_by_id(claims.principal_id()).await? else {
            return Err(AppError::authentication("Account no longer exists"));
        };
        if !principal.can_login() {
            return Err(AppError::authentication("Account is deactivated"));
        }

        let tokens = self
            .jwt_encoder
            .generate_token_pair(principal.id, principal.role)?;

        Ok(LoginOutcome { tokens, principal })
    }

    /// Loads the acting principal's own profile.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<Principal> {
        self.principal_repo
            .find_by_id(ctx.principal_id)
            .await?
            .ok_or_else(|| AppError::not_found("Principal not found"))
    }
}
