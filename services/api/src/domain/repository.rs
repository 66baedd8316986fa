#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use velvetrope_domain::pagination::PageRequest;

use crate::domain::types::{BlacklistEntry, NewBlacklistEntry, NewUser, Session, User};
use crate::error::ApiError;

/// Repository for member accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError>;

    /// Lookup by normalized (lowercase) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    async fn find_by_verification_token(&self, token: &str) -> Result<Option<User>, ApiError>;

    /// Insert a new unverified account, returning the stored row.
    async fn create(&self, user: &NewUser) -> Result<User, ApiError>;

    /// Remove an account. Used to roll back registration when the
    /// verification email cannot be sent.
    async fn delete(&self, id: i32) -> Result<(), ApiError>;

    /// Flip the verified flag and clear the verification token + expiry.
    async fn mark_verified(&self, id: i32) -> Result<(), ApiError>;

    /// Replace the verification token, keeping at most one live token per
    /// unverified account.
    async fn set_verification_token(
        &self,
        id: i32,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError>;
}

/// Repository for server-side sessions.
pub trait SessionRepository: Send + Sync {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, ApiError>;

    /// Delete every session owned by the user and insert the new one, in a
    /// single transaction (single-active-session policy).
    async fn replace_for_user(
        &self,
        user_id: i32,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError>;

    /// Delete by token. Returns `true` if a row was deleted, `false` if none
    /// existed (logout is idempotent).
    async fn delete_by_token(&self, token: &str) -> Result<bool, ApiError>;
}

/// Repository for blacklist entries.
pub trait BlacklistRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<BlacklistEntry>, ApiError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<BlacklistEntry>, ApiError>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<BlacklistEntry>, ApiError>;

    async fn create(&self, entry: &NewBlacklistEntry) -> Result<BlacklistEntry, ApiError>;

    async fn update(&self, entry: &BlacklistEntry) -> Result<(), ApiError>;

    /// Delete an entry. Returns `true` if deleted, `false` if not found.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Port for the outbound verification-email sender.
pub trait VerificationMailer: Send + Sync {
    async fn send_verification(
        &self,
        email: &str,
        name: &str,
        token: &str,
    ) -> Result<(), ApiError>;
}
