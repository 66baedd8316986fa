use chrono::Utc;

use velvetrope_domain::blacklist::mask_contact;
use velvetrope_domain::pagination::PageRequest;
use velvetrope_domain::user::UserRole;

use crate::domain::repository::BlacklistRepository;
use crate::domain::types::{BlacklistEntry, NewBlacklistEntry};
use crate::error::ApiError;

fn has_contact(phone: &Option<String>, instagram: &Option<String>) -> bool {
    let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    filled(phone) || filled(instagram)
}

/// Censor the contact fields of an entry for non-admin viewers.
fn censor_entry(mut entry: BlacklistEntry, role: UserRole) -> BlacklistEntry {
    if role >= UserRole::Admin {
        return entry;
    }
    entry.phone = entry.phone.as_deref().map(mask_contact);
    entry.instagram = entry.instagram.as_deref().map(mask_contact);
    entry
}

// ── ListBlacklist ────────────────────────────────────────────────────────────

pub struct ListBlacklistUseCase<B: BlacklistRepository> {
    pub blacklist: B,
}

impl<B: BlacklistRepository> ListBlacklistUseCase<B> {
    /// List entries for a viewer. Non-admin callers get masked phone and
    /// instagram values; storage is untouched either way.
    pub async fn execute(
        &self,
        role: UserRole,
        page: PageRequest,
    ) -> Result<Vec<BlacklistEntry>, ApiError> {
        let entries = self.blacklist.list(page.clamped()).await?;
        Ok(entries
            .into_iter()
            .map(|entry| censor_entry(entry, role))
            .collect())
    }
}

// ── CreateBlacklistEntry ─────────────────────────────────────────────────────

pub struct CreateBlacklistEntryInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub reason: String,
}

pub struct CreateBlacklistEntryUseCase<B: BlacklistRepository> {
    pub blacklist: B,
}

impl<B: BlacklistRepository> CreateBlacklistEntryUseCase<B> {
    pub async fn execute(
        &self,
        actor_id: i32,
        input: CreateBlacklistEntryInput,
    ) -> Result<BlacklistEntry, ApiError> {
        if !has_contact(&input.phone, &input.instagram) {
            return Err(ApiError::MissingContact);
        }
        if input.reason.trim().is_empty() {
            return Err(ApiError::EmptyReason);
        }
        if let Some(ref phone) = input.phone {
            if self.blacklist.find_by_phone(phone).await?.is_some() {
                return Err(ApiError::PhoneTaken);
            }
        }

        self.blacklist
            .create(&NewBlacklistEntry {
                name: input.name,
                phone: input.phone,
                instagram: input.instagram,
                reason: input.reason,
                created_by: actor_id,
            })
            .await
    }
}

// ── UpdateBlacklistEntry ─────────────────────────────────────────────────────

/// Patch semantics: `None` leaves a field alone, `Some(None)` clears it.
#[derive(Default)]
pub struct UpdateBlacklistEntryInput {
    pub name: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub instagram: Option<Option<String>>,
    pub reason: Option<String>,
}

pub struct UpdateBlacklistEntryUseCase<B: BlacklistRepository> {
    pub blacklist: B,
}

impl<B: BlacklistRepository> UpdateBlacklistEntryUseCase<B> {
    pub async fn execute(
        &self,
        actor_id: i32,
        id: i32,
        input: UpdateBlacklistEntryInput,
    ) -> Result<(), ApiError> {
        let Some(mut entry) = self.blacklist.find_by_id(id).await? else {
            return Err(ApiError::EntryNotFound);
        };

        if let Some(name) = input.name {
            entry.name = name;
        }
        if let Some(phone) = input.phone {
            entry.phone = phone;
        }
        if let Some(instagram) = input.instagram {
            entry.instagram = instagram;
        }
        if let Some(reason) = input.reason {
            entry.reason = reason;
        }

        // The patched row must still satisfy the entry invariants.
        if !has_contact(&entry.phone, &entry.instagram) {
            return Err(ApiError::MissingContact);
        }
        if entry.reason.trim().is_empty() {
            return Err(ApiError::EmptyReason);
        }
        if let Some(ref phone) = entry.phone {
            if let Some(other) = self.blacklist.find_by_phone(phone).await? {
                if other.id != entry.id {
                    return Err(ApiError::PhoneTaken);
                }
            }
        }

        entry.updated_by = actor_id;
        entry.updated_at = Utc::now();
        self.blacklist.update(&entry).await
    }
}

// ── DeleteBlacklistEntry ─────────────────────────────────────────────────────

pub struct DeleteBlacklistEntryUseCase<B: BlacklistRepository> {
    pub blacklist: B,
}

impl<B: BlacklistRepository> DeleteBlacklistEntryUseCase<B> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        if !self.blacklist.delete(id).await? {
            return Err(ApiError::EntryNotFound);
        }
        Ok(())
    }
}
