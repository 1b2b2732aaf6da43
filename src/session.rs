//! Authenticated session lifecycle.
//!
//! A session is built per request from the bearer token: the claims are read
//! locally, then the backend confirms who the token belongs to. Logout has no
//! server state to drop.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::backend::{BackendClient, LoginGrant};
use crate::entities::{user::has_admin_role, SessionUser};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::peek_claims;

pub const ADMIN_REDIRECT: &str = "/admin";
pub const HOME_REDIRECT: &str = "/";

#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    pub user: SessionUser,
    pub expires_at: Option<DateTime<Utc>>,
    /// False when the backend could not be reached and the user was taken
    /// from the token claims
    pub verified: bool,
}

impl Session {
    pub async fn establish(backend: &BackendClient, token: &str) -> AppResult<Self> {
        let claims = peek_claims(token)?;
        let expires_at = claims.expires_at();

        let (user, verified) = match backend.current_user(token).await {
            Ok(user) => (user, true),
            Err(AppError::Unauthorized(msg)) => {
                tracing::info!(user = %claims.sub, "Backend rejected session token");
                return Err(AppError::Unauthorized(msg));
            }
            Err(AppError::Upstream(msg)) => {
                tracing::warn!(user = %claims.sub, error = %msg, "Backend unreachable, using token claims");
                let user = SessionUser {
                    username: claims.sub,
                    email: None,
                    roles: claims.roles,
                };
                (user, false)
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            token: token.to_string(),
            user,
            expires_at,
            verified,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}

/// Where to send a freshly logged-in user
pub fn redirect_for<S: AsRef<str>>(roles: &[S]) -> &'static str {
    if has_admin_role(roles) {
        ADMIN_REDIRECT
    } else {
        HOME_REDIRECT
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub token: String,
    pub username: String,
    pub roles: Vec<String>,
    pub is_admin: bool,
    pub redirect: &'static str,
}

impl From<LoginGrant> for LoginOutcome {
    fn from(grant: LoginGrant) -> Self {
        Self {
            redirect: redirect_for(&grant.roles),
            is_admin: has_admin_role(&grant.roles),
            token: grant.token,
            username: grant.username,
            roles: grant.roles,
        }
    }
}
