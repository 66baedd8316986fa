use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};

use velvetrope_domain::pagination::PageRequest;
use velvetrope_domain::user::UserRole;
use velvetrope_schema::{blacklist_entries, sessions, users};

use crate::domain::repository::{BlacklistRepository, SessionRepository, UserRepository};
use crate::domain::types::{BlacklistEntry, NewBlacklistEntry, NewUser, Session, User};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_verification_token(&self, token: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::VerificationToken.eq(token))
            .one(&self.db)
            .await
            .context("find user by verification token")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let now = Utc::now();
        let model = users::ActiveModel {
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            name: Set(user.name.clone()),
            role: Set(user.role.as_u8() as i16),
            email_verified: Set(false),
            verification_token: Set(Some(user.verification_token.clone())),
            verification_expires_at: Set(Some(user.verification_expires_at)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        user_from_model(model)
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(())
    }

    async fn mark_verified(&self, id: i32) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(id),
            email_verified: Set(true),
            verification_token: Set(None),
            verification_expires_at: Set(None),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark user verified")?;
        Ok(())
    }

    async fn set_verification_token(
        &self,
        id: i32,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(id),
            verification_token: Set(Some(token.to_owned())),
            verification_expires_at: Set(Some(expires_at)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set verification token")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> Result<User, ApiError> {
    let role = UserRole::from_u8(model.role as u8).context("unknown user role in database")?;
    Ok(User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        name: model.name,
        role,
        email_verified: model.email_verified,
        verification_token: model.verification_token,
        verification_expires_at: model.verification_expires_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Session repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSessionRepository {
    pub db: DatabaseConnection,
}

impl SessionRepository for DbSessionRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, ApiError> {
        let model = sessions::Entity::find()
            .filter(sessions::Column::Token.eq(token))
            .one(&self.db)
            .await
            .context("find session by token")?;
        Ok(model.map(session_from_model))
    }

    async fn replace_for_user(
        &self,
        user_id: i32,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        // Delete + insert in one transaction so concurrent logins cannot
        // leave two live sessions for the same user.
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let token = token.to_owned();
                Box::pin(async move {
                    sessions::Entity::delete_many()
                        .filter(sessions::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    sessions::ActiveModel {
                        user_id: Set(user_id),
                        token: Set(token),
                        expires_at: Set(expires_at),
                        created_at: Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("replace session for user")?;
        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, ApiError> {
        let result = sessions::Entity::delete_many()
            .filter(sessions::Column::Token.eq(token))
            .exec(&self.db)
            .await
            .context("delete session by token")?;
        Ok(result.rows_affected > 0)
    }
}

fn session_from_model(model: sessions::Model) -> Session {
    Session {
        id: model.id,
        user_id: model.user_id,
        token: model.token,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

// ── Blacklist repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBlacklistRepository {
    pub db: DatabaseConnection,
}

impl BlacklistRepository for DbBlacklistRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<BlacklistEntry>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = blacklist_entries::Entity::find()
            .order_by_desc(blacklist_entries::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list blacklist entries")?;
        Ok(models.into_iter().map(blacklist_entry_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<BlacklistEntry>, ApiError> {
        let model = blacklist_entries::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find blacklist entry by id")?;
        Ok(model.map(blacklist_entry_from_model))
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<BlacklistEntry>, ApiError> {
        let model = blacklist_entries::Entity::find()
            .filter(blacklist_entries::Column::Phone.eq(phone))
            .one(&self.db)
            .await
            .context("find blacklist entry by phone")?;
        Ok(model.map(blacklist_entry_from_model))
    }

    async fn create(&self, entry: &NewBlacklistEntry) -> Result<BlacklistEntry, ApiError> {
        let now = Utc::now();
        let model = blacklist_entries::ActiveModel {
            name: Set(entry.name.clone()),
            phone: Set(entry.phone.clone()),
            instagram: Set(entry.instagram.clone()),
            reason: Set(entry.reason.clone()),
            created_by: Set(entry.created_by),
            updated_by: Set(entry.created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create blacklist entry")?;
        Ok(blacklist_entry_from_model(model))
    }

    async fn update(&self, entry: &BlacklistEntry) -> Result<(), ApiError> {
        blacklist_entries::ActiveModel {
            id: Set(entry.id),
            name: Set(entry.name.clone()),
            phone: Set(entry.phone.clone()),
            instagram: Set(entry.instagram.clone()),
            reason: Set(entry.reason.clone()),
            updated_by: Set(entry.updated_by),
            updated_at: Set(entry.updated_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update blacklist entry")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = blacklist_entries::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete blacklist entry")?;
        Ok(result.rows_affected > 0)
    }
}

fn blacklist_entry_from_model(model: blacklist_entries::Model) -> BlacklistEntry {
    BlacklistEntry {
        id: model.id,
        name: model.name,
        phone: model.phone,
        instagram: model.instagram,
        reason: model.reason,
        created_by: model.created_by,
        updated_by: model.updated_by,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
