use chrono::{DateTime, TimeZone, Utc};

use velvetrope_auth::password::verify_password;
use velvetrope_auth::token::issue_session_token;
use velvetrope_domain::user::normalize_email;

use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::types::CurrentUser;
use crate::error::ApiError;

pub struct CreateSessionInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct CreateSessionOutput {
    pub user: CurrentUser,
    /// Handed to the cookie builder by the handler; never serialized into a
    /// response body.
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub struct CreateSessionUseCase<U: UserRepository, S: SessionRepository> {
    pub users: U,
    pub sessions: S,
    pub jwt_secret: String,
}

impl<U: UserRepository, S: SessionRepository> CreateSessionUseCase<U, S> {
    pub async fn execute(&self, input: CreateSessionInput) -> Result<CreateSessionOutput, ApiError> {
        let email = normalize_email(&input.email);

        // Unknown email and wrong password return the same error; the
        // response must not reveal which check failed.
        let Some(user) = self.users.find_by_email(&email).await? else {
            return Err(ApiError::InvalidCredentials);
        };

        if !verify_password(&input.password, &user.password_hash)
            .map_err(anyhow::Error::from)?
        {
            return Err(ApiError::InvalidCredentials);
        }

        if !user.email_verified {
            return Err(ApiError::EmailNotVerified { email });
        }

        let (token, exp) =
            issue_session_token(user.id, &user.email, user.role.as_u8(), &self.jwt_secret)
                .map_err(anyhow::Error::from)?;
        let expires_at = Utc
            .timestamp_opt(exp as i64, 0)
            .single()
            .ok_or_else(|| anyhow::anyhow!("token expiry out of range"))?;

        // Single-active-session policy: prior sessions die with this call,
        // atomically with the insert.
        self.sessions
            .replace_for_user(user.id, &token, expires_at)
            .await?;

        Ok(CreateSessionOutput {
            user: CurrentUser::from(&user),
            token,
            expires_at,
        })
    }
}
