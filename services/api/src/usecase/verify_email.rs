use chrono::{Duration, Utc};

use velvetrope_auth::password::generate_verification_token;
use velvetrope_domain::user::normalize_email;

use crate::domain::repository::{UserRepository, VerificationMailer};
use crate::domain::types::VERIFICATION_TTL_SECS;
use crate::error::ApiError;

// ── VerifyEmail ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct VerifyEmailOutput {
    pub email: String,
}

pub struct VerifyEmailUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> VerifyEmailUseCase<U> {
    pub async fn execute(&self, token: &str) -> Result<VerifyEmailOutput, ApiError> {
        let Some(user) = self.users.find_by_verification_token(token).await? else {
            return Err(ApiError::InvalidVerificationToken);
        };

        // An expired token changes nothing; the account stays unverified
        // until the user requests a fresh one.
        match user.verification_expires_at {
            Some(expires_at) if expires_at > Utc::now() => {}
            _ => return Err(ApiError::VerificationTokenExpired),
        }

        self.users.mark_verified(user.id).await?;
        Ok(VerifyEmailOutput { email: user.email })
    }
}

// ── ResendVerification ───────────────────────────────────────────────────────

pub struct ResendVerificationUseCase<U: UserRepository, M: VerificationMailer> {
    pub users: U,
    pub mailer: M,
}

impl<U: UserRepository, M: VerificationMailer> ResendVerificationUseCase<U, M> {
    /// Re-issue the verification token and resend the mail.
    ///
    /// An unknown email returns `Ok` so the endpoint cannot be used to
    /// probe which addresses are registered.
    pub async fn execute(&self, email: &str) -> Result<(), ApiError> {
        let email = normalize_email(email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            return Ok(());
        };

        if user.email_verified {
            return Err(ApiError::AlreadyVerified);
        }

        // Replaces the previous token, so at most one stays live.
        let token = generate_verification_token();
        let expires_at = Utc::now() + Duration::seconds(VERIFICATION_TTL_SECS);
        self.users
            .set_verification_token(user.id, &token, expires_at)
            .await?;

        self.mailer
            .send_verification(&user.email, &user.name, &token)
            .await
    }
}
