use chrono::{Duration, Utc};

use velvetrope_auth::password::{generate_verification_token, hash_password};
use velvetrope_domain::user::{MIN_PASSWORD_LEN, UserRole, normalize_email, validate_email};

use crate::domain::repository::{UserRepository, VerificationMailer};
use crate::domain::types::{NewUser, VERIFICATION_TTL_SECS};
use crate::error::ApiError;

pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug)]
pub struct RegisterOutput {
    /// Normalized email the verification mail was sent to.
    pub email: String,
}

pub struct RegisterUseCase<U: UserRepository, M: VerificationMailer> {
    pub users: U,
    pub mailer: M,
}

impl<U: UserRepository, M: VerificationMailer> RegisterUseCase<U, M> {
    pub async fn execute(&self, input: RegisterInput) -> Result<RegisterOutput, ApiError> {
        if !validate_email(&input.email) {
            return Err(ApiError::InvalidEmail);
        }
        if input.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::WeakPassword);
        }

        let email = normalize_email(&input.email);
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(ApiError::EmailTaken);
        }

        let password_hash = hash_password(&input.password).map_err(anyhow::Error::from)?;
        let token = generate_verification_token();
        let user = self
            .users
            .create(&NewUser {
                email: email.clone(),
                password_hash,
                name: input.name,
                role: UserRole::Member,
                verification_token: token.clone(),
                verification_expires_at: Utc::now() + Duration::seconds(VERIFICATION_TTL_SECS),
            })
            .await?;

        // Mail failure rolls the row back; the address stays free to retry.
        if let Err(e) = self.mailer.send_verification(&email, &user.name, &token).await {
            self.users.delete(user.id).await?;
            return Err(e);
        }

        Ok(RegisterOutput { email })
    }
}
