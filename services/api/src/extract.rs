//! Request extractor resolving the auth cookie to an authenticated user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use velvetrope_auth::cookie::AUTH_TOKEN;

use crate::domain::types::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::session::{AuthOutcome, VerifySessionUseCase};

/// Authenticated identity for handlers that require a login.
///
/// Runs the full verification chain (cookie → token → stored session →
/// user row) and rejects with a single 401 `UNAUTHENTICATED` whatever the
/// internal reason. Role enforcement (403) is done by handlers after
/// extraction. Handlers that want to branch on the rejection reason call
/// `VerifySessionUseCase` directly instead.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: CurrentUser,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(AUTH_TOKEN).map(|c| c.value().to_owned());
        let state = state.clone();

        async move {
            let usecase = VerifySessionUseCase {
                sessions: state.session_repo(),
                users: state.user_repo(),
                jwt_secret: state.jwt_secret.clone(),
            };
            match usecase.execute(token.as_deref()).await? {
                AuthOutcome::Authenticated(user) => Ok(Self { user }),
                AuthOutcome::Rejected(_) => Err(ApiError::Unauthenticated),
            }
        }
    }
}
