use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use velvetrope_core::health::{healthz, readyz};
use velvetrope_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{create_session, register, resend_verification, revoke_session, verify_email},
    blacklist::{
        create_blacklist_entry, delete_blacklist_entry, list_blacklist, update_blacklist_entry,
    },
    user::get_me,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration + verification
        .route("/auth/register", post(register))
        .route("/auth/verify-email", post(verify_email))
        .route("/auth/verify-email/resend", post(resend_verification))
        // Session
        .route("/auth/session", post(create_session))
        .route("/auth/session", delete(revoke_session))
        // Current user
        .route("/users/@me", get(get_me))
        // Blacklist
        .route("/blacklist", get(list_blacklist))
        .route("/blacklist", post(create_blacklist_entry))
        .route("/blacklist/{id}", patch(update_blacklist_entry))
        .route("/blacklist/{id}", delete(delete_blacklist_entry))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
