use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Claims carried by a backend-issued session token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenClaims {
    pub sub: String, // username
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default, alias = "authorities")]
    pub roles: Vec<String>,
}

impl TokenClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Read a token's claims without checking its signature.
///
/// The backend holds the signing key and re-validates every call; locally we
/// only need the expiry and the roles. Expired or undecodable tokens are
/// rejected here.
pub fn peek_claims(token: &str) -> AppResult<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_aud = false;
    validation.leeway = 0;

    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::Unauthorized("Session expired".to_string()),
            _ => AppError::Unauthorized(format!("Invalid token: {}", e)),
        })
}
