use sea_orm::DatabaseConnection;

use crate::infra::db::{DbBlacklistRepository, DbSessionRepository, DbUserRepository};
use crate::infra::email::SmtpMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: SmtpMailer,
    pub jwt_secret: String,
    pub cookie_domain: String,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn session_repo(&self) -> DbSessionRepository {
        DbSessionRepository {
            db: self.db.clone(),
        }
    }

    pub fn blacklist_repo(&self) -> DbBlacklistRepository {
        DbBlacklistRepository {
            db: self.db.clone(),
        }
    }
}
