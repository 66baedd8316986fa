use axum::Json;

use crate::error::ApiError;
use crate::extract::Identity;
use crate::handlers::auth::UserResponse;

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(identity: Identity) -> Result<Json<UserResponse>, ApiError> {
    let user = identity.user;
    Ok(Json(UserResponse {
        id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
    }))
}
