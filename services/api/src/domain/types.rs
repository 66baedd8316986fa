use chrono::{DateTime, Utc};

use velvetrope_domain::user::UserRole;

/// Full member account row.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub email_verified: bool,
    pub verification_token: Option<String>,
    pub verification_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a new (unverified) account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub verification_token: String,
    pub verification_expires_at: DateTime<Utc>,
}

/// Public identity resolved from a live session. Never carries the
/// password hash or verification state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// Server-side session row.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn is_live(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Blacklist record as stored. Censorship happens on the way out, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistEntry {
    pub id: i32,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub reason: String,
    pub created_by: i32,
    pub updated_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a blacklist entry.
#[derive(Debug, Clone)]
pub struct NewBlacklistEntry {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub reason: String,
    pub created_by: i32,
}

/// Email-verification token time-to-live in seconds (24 hours).
pub const VERIFICATION_TTL_SECS: i64 = 86400;
