use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer, Serialize};

use velvetrope_domain::pagination::PageRequest;
use velvetrope_domain::user::UserRole;

use crate::domain::types::BlacklistEntry;
use crate::error::ApiError;
use crate::extract::Identity;
use crate::state::AppState;
use crate::usecase::blacklist::{
    CreateBlacklistEntryInput, CreateBlacklistEntryUseCase, DeleteBlacklistEntryUseCase,
    ListBlacklistUseCase, UpdateBlacklistEntryInput, UpdateBlacklistEntryUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct BlacklistEntryResponse {
    pub id: i32,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub reason: String,
    pub created_by: i32,
    pub updated_by: i32,
    #[serde(serialize_with = "velvetrope_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "velvetrope_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<BlacklistEntry> for BlacklistEntryResponse {
    fn from(entry: BlacklistEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            phone: entry.phone,
            instagram: entry.instagram,
            reason: entry.reason,
            created_by: entry.created_by,
            updated_by: entry.updated_by,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

fn require_admin(identity: &Identity) -> Result<(), ApiError> {
    if identity.user.role < UserRole::Admin {
        return Err(ApiError::Forbidden);
    }
    Ok(())
}

// ── GET /blacklist ───────────────────────────────────────────────────────────

pub async fn list_blacklist(
    identity: Identity,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<BlacklistEntryResponse>>, ApiError> {
    let usecase = ListBlacklistUseCase {
        blacklist: state.blacklist_repo(),
    };
    let entries = usecase.execute(identity.user.role, page).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

// ── POST /blacklist ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBlacklistEntryRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub reason: String,
}

pub async fn create_blacklist_entry(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateBlacklistEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&identity)?;
    let usecase = CreateBlacklistEntryUseCase {
        blacklist: state.blacklist_repo(),
    };
    let entry = usecase
        .execute(
            identity.user.id,
            CreateBlacklistEntryInput {
                name: body.name,
                phone: body.phone,
                instagram: body.instagram,
                reason: body.reason,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(BlacklistEntryResponse::from(entry))))
}

// ── PATCH /blacklist/{id} ────────────────────────────────────────────────────

// Distinguishes "field absent" (leave alone) from "field: null" (clear):
// absent stays None, explicit null becomes Some(None).
fn some_field<'de, T, D>(de: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(de).map(Some)
}

#[derive(Deserialize, Default)]
pub struct UpdateBlacklistEntryRequest {
    #[serde(default, deserialize_with = "some_field")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "some_field")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "some_field")]
    pub instagram: Option<Option<String>>,
    pub reason: Option<String>,
}

pub async fn update_blacklist_entry(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateBlacklistEntryRequest>,
) -> Result<StatusCode, ApiError> {
    require_admin(&identity)?;
    let usecase = UpdateBlacklistEntryUseCase {
        blacklist: state.blacklist_repo(),
    };
    usecase
        .execute(
            identity.user.id,
            id,
            UpdateBlacklistEntryInput {
                name: body.name,
                phone: body.phone,
                instagram: body.instagram,
                reason: body.reason,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /blacklist/{id} ───────────────────────────────────────────────────

pub async fn delete_blacklist_entry(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_admin(&identity)?;
    let usecase = DeleteBlacklistEntryUseCase {
        blacklist: state.blacklist_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
