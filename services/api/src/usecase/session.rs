use velvetrope_auth::token::validate_session_token;

use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::types::CurrentUser;
use crate::error::ApiError;

/// Why a request could not be resolved to an identity.
///
/// Every variant maps to the same 401 at the HTTP boundary; the split lets
/// internal callers and tests branch on structure. None of these are
/// errors: "not logged in" is an ordinary outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRejection {
    /// No auth cookie on the request.
    NoCookie,
    /// Cookie present but the token failed signature or expiry checks.
    InvalidToken,
    /// Token is valid but no stored session matches it (logged out elsewhere).
    SessionNotFound,
    /// Stored session exists but its expiry has passed; the row is deleted.
    SessionExpired,
    /// Session is live but the owning user row is gone.
    UserMissing,
}

/// Result of speculative session verification.
#[derive(Debug)]
pub enum AuthOutcome {
    Authenticated(CurrentUser),
    Rejected(SessionRejection),
}

// ── VerifySession ────────────────────────────────────────────────────────────

pub struct VerifySessionUseCase<S: SessionRepository, U: UserRepository> {
    pub sessions: S,
    pub users: U,
    pub jwt_secret: String,
}

impl<S: SessionRepository, U: UserRepository> VerifySessionUseCase<S, U> {
    /// Resolve a raw cookie value to an identity or a typed rejection.
    ///
    /// `Err` is reserved for infrastructure failures (persistence layer
    /// unreachable); any ordinary "not logged in" case comes back as
    /// `Ok(Rejected(_))`, so callers may invoke this speculatively.
    pub async fn execute(&self, cookie: Option<&str>) -> Result<AuthOutcome, ApiError> {
        let Some(token) = cookie else {
            return Ok(AuthOutcome::Rejected(SessionRejection::NoCookie));
        };

        // Signature/expiry check happens before any database lookup.
        if validate_session_token(token, &self.jwt_secret).is_err() {
            return Ok(AuthOutcome::Rejected(SessionRejection::InvalidToken));
        }

        let Some(session) = self.sessions.find_by_token(token).await? else {
            return Ok(AuthOutcome::Rejected(SessionRejection::SessionNotFound));
        };

        if !session.is_live() {
            // Lazy cleanup of the dead row.
            self.sessions.delete_by_token(token).await?;
            return Ok(AuthOutcome::Rejected(SessionRejection::SessionExpired));
        }

        let Some(user) = self.users.find_by_id(session.user_id).await? else {
            return Ok(AuthOutcome::Rejected(SessionRejection::UserMissing));
        };

        Ok(AuthOutcome::Authenticated(CurrentUser::from(&user)))
    }
}

// ── RevokeSession (logout) ───────────────────────────────────────────────────

pub struct RevokeSessionUseCase<S: SessionRepository> {
    pub sessions: S,
}

impl<S: SessionRepository> RevokeSessionUseCase<S> {
    /// Delete the session named by the cookie, if any. Succeeds whether or
    /// not a session existed — logout is idempotent.
    pub async fn execute(&self, cookie: Option<&str>) -> Result<(), ApiError> {
        if let Some(token) = cookie {
            self.sessions.delete_by_token(token).await?;
        }
        Ok(())
    }
}
