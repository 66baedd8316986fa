use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use velvetrope_auth::cookie::{AUTH_TOKEN, clear_auth_cookie, set_auth_cookie};
use velvetrope_domain::user::UserRole;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::login::{CreateSessionInput, CreateSessionUseCase};
use crate::usecase::register::{RegisterInput, RegisterUseCase};
use crate::usecase::session::RevokeSessionUseCase;
use crate::usecase::verify_email::{ResendVerificationUseCase, VerifyEmailUseCase};

/// Public profile shape returned by login and `GET /users/@me`.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

// ── POST /auth/register ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub email: String,
    pub pending_verification: bool,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        mailer: state.mailer.clone(),
    };
    let out = usecase
        .execute(RegisterInput {
            email: body.email,
            password: body.password,
            name: body.name,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            email: out.email,
            pending_verification: true,
        }),
    ))
}

// ── POST /auth/session ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub email: String,
    pub password: String,
}

pub async fn create_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = CreateSessionUseCase {
        users: state.user_repo(),
        sessions: state.session_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(CreateSessionInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    // The token travels only in the cookie; the body carries the profile.
    let jar = set_auth_cookie(
        jar,
        out.token,
        state.cookie_domain.clone(),
        state.cookie_secure,
    );
    let body = UserResponse {
        id: out.user.id,
        email: out.user.email,
        name: out.user.name,
        role: out.user.role,
    };
    Ok((StatusCode::CREATED, jar, Json(body)))
}

// ── DELETE /auth/session ──────────────────────────────────────────────────────

pub async fn revoke_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    let token = jar.get(AUTH_TOKEN).map(|c| c.value().to_owned());

    let usecase = RevokeSessionUseCase {
        sessions: state.session_repo(),
    };
    usecase.execute(token.as_deref()).await?;

    let jar = clear_auth_cookie(jar, state.cookie_domain.clone(), state.cookie_secure);
    Ok((StatusCode::NO_CONTENT, jar))
}

// ── POST /auth/verify-email ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Serialize)]
pub struct VerifyEmailResponse {
    pub email: String,
    pub verified: bool,
}

pub async fn verify_email(
    State(state): State<AppState>,
    Json(body): Json<VerifyEmailRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = VerifyEmailUseCase {
        users: state.user_repo(),
    };
    let out = usecase.execute(&body.token).await?;
    Ok((
        StatusCode::OK,
        Json(VerifyEmailResponse {
            email: out.email,
            verified: true,
        }),
    ))
}

// ── POST /auth/verify-email/resend ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

pub async fn resend_verification(
    State(state): State<AppState>,
    Json(body): Json<ResendVerificationRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = ResendVerificationUseCase {
        users: state.user_repo(),
        mailer: state.mailer.clone(),
    };
    usecase.execute(&body.email).await?;
    // Same acknowledgment whether or not the address is registered.
    Ok(StatusCode::ACCEPTED)
}
