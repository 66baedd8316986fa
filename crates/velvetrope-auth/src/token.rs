//! Signed session-token codec.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cookie::SESSION_TTL_SECS;

/// User identity extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: i32,
    pub email: String,
    pub role: u8,
    pub exp: u64,
}

/// Errors returned by [`validate_session_token`].
///
/// Callers must collapse every variant to "unauthenticated" at the HTTP
/// boundary; the distinction exists for internal branching and tests only.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload carried by the session cookie.
///
/// | Field | JWT claim | Rust type | Meaning |
/// |-------|-----------|-----------|---------|
/// | `sub` | `sub` | integer string | user ID |
/// | `email` | custom | string | user email at issuance |
/// | `role` | custom | `u8` wire value | see `velvetrope_domain::user::UserRole` |
/// | `iat` | `iat` | seconds since epoch | issuance timestamp |
/// | `exp` | `exp` | seconds since epoch | token expiration |
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub role: u8,
    pub iat: u64,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a signed session token for a user. Returns the token and its
/// expiration timestamp (now + 7 days).
///
/// Signing failures indicate a broken secret configuration and are fatal to
/// the request.
pub fn issue_session_token(
    user_id: i32,
    email: &str,
    role: u8,
    secret: &str,
) -> Result<(String, u64), jsonwebtoken::errors::Error> {
    let iat = now_secs();
    let exp = iat + SESSION_TTL_SECS;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_owned(),
        role,
        iat,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok((token, exp))
}

/// Decode and validate a session-cookie value, returning parsed identity.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s tolerates minor clock skew.
pub fn validate_session_token(cookie_value: &str, secret: &str) -> Result<TokenInfo, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        cookie_value,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    let claims = data.claims;
    let user_id = claims.sub.parse::<i32>().map_err(|_| TokenError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        email: claims.email,
        role: claims.role,
        exp: claims.exp,
    })
}
