use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Members API domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password too weak")]
    WeakPassword,
    #[error("email already registered")]
    EmailTaken,
    #[error("email or password incorrect")]
    InvalidCredentials,
    #[error("email not verified")]
    EmailNotVerified { email: String },
    #[error("authentication required")]
    Unauthenticated,
    #[error("forbidden")]
    Forbidden,
    #[error("invalid verification token")]
    InvalidVerificationToken,
    #[error("verification token expired")]
    VerificationTokenExpired,
    #[error("email already verified")]
    AlreadyVerified,
    #[error("phone or instagram required")]
    MissingContact,
    #[error("reason required")]
    EmptyReason,
    #[error("phone already blacklisted")]
    PhoneTaken,
    #[error("entry not found")]
    EntryNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::EmailNotVerified { .. } => "EMAIL_NOT_VERIFIED",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidVerificationToken => "INVALID_VERIFICATION_TOKEN",
            Self::VerificationTokenExpired => "VERIFICATION_TOKEN_EXPIRED",
            Self::AlreadyVerified => "ALREADY_VERIFIED",
            Self::MissingContact => "MISSING_CONTACT",
            Self::EmptyReason => "EMPTY_REASON",
            Self::PhoneTaken => "PHONE_TAKEN",
            Self::EntryNotFound => "ENTRY_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidEmail
            | Self::WeakPassword
            | Self::InvalidVerificationToken
            | Self::VerificationTokenExpired
            | Self::MissingContact
            | Self::EmptyReason => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::EmailNotVerified { .. } | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::EntryNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken | Self::AlreadyVerified | Self::PhoneTaken => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = match &self {
            // Clients use this flag to route to the resend-verification screen.
            Self::EmailNotVerified { email } => serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
                "requires_verification": true,
                "email": email,
            }),
            _ => serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
            }),
        };
        (status, axum::Json(body)).into_response()
    }
}
