use velvetrope_api::error::ApiError;
use velvetrope_api::usecase::blacklist::{
    CreateBlacklistEntryInput, CreateBlacklistEntryUseCase, DeleteBlacklistEntryUseCase,
    ListBlacklistUseCase, UpdateBlacklistEntryInput, UpdateBlacklistEntryUseCase,
};
use velvetrope_domain::pagination::PageRequest;
use velvetrope_domain::user::UserRole;

use crate::helpers::{MockBlacklistRepo, test_entry};

fn create_input(phone: Option<&str>, instagram: Option<&str>, reason: &str) -> CreateBlacklistEntryInput {
    CreateBlacklistEntryInput {
        name: None,
        phone: phone.map(str::to_owned),
        instagram: instagram.map(str::to_owned),
        reason: reason.to_owned(),
    }
}

// ── Censorship ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_censor_contact_fields_for_member_viewer() {
    let usecase = ListBlacklistUseCase {
        blacklist: MockBlacklistRepo::new(vec![test_entry(1)]),
    };

    let entries = usecase
        .execute(UserRole::Member, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(entries[0].phone.as_deref(), Some("081234xxxx"));
    assert_eq!(entries[0].instagram.as_deref(), Some("nightowl_xxxx"));
    assert_eq!(entries[0].reason, "skipped out on a table bill");
}

#[tokio::test]
async fn should_return_uncensored_entries_for_admin_viewer() {
    let usecase = ListBlacklistUseCase {
        blacklist: MockBlacklistRepo::new(vec![test_entry(1)]),
    };

    let entries = usecase
        .execute(UserRole::Admin, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(entries[0].phone.as_deref(), Some("0812345678"));
    assert_eq!(entries[0].instagram.as_deref(), Some("nightowl_bkk"));
}

#[tokio::test]
async fn should_not_touch_storage_when_censoring() {
    let repo = MockBlacklistRepo::new(vec![test_entry(1)]);
    let entries_handle = repo.entries_handle();
    let usecase = ListBlacklistUseCase { blacklist: repo };

    usecase
        .execute(UserRole::Member, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(
        entries_handle.lock().unwrap()[0].phone.as_deref(),
        Some("0812345678"),
        "censorship is an outward transform only"
    );
}

// ── Create ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_entry_with_audit_fields() {
    let usecase = CreateBlacklistEntryUseCase {
        blacklist: MockBlacklistRepo::empty(),
    };

    let entry = usecase
        .execute(42, create_input(Some("0899999999"), None, "fake table booking"))
        .await
        .unwrap();

    assert_eq!(entry.created_by, 42);
    assert_eq!(entry.updated_by, 42);
    assert_eq!(entry.reason, "fake table booking");
}

#[tokio::test]
async fn should_reject_entry_without_phone_or_instagram() {
    let usecase = CreateBlacklistEntryUseCase {
        blacklist: MockBlacklistRepo::empty(),
    };

    let result = usecase.execute(42, create_input(None, None, "reason")).await;

    assert!(
        matches!(result, Err(ApiError::MissingContact)),
        "expected MissingContact, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_entry_with_blank_reason() {
    let usecase = CreateBlacklistEntryUseCase {
        blacklist: MockBlacklistRepo::empty(),
    };

    let result = usecase
        .execute(42, create_input(Some("0899999999"), None, "   "))
        .await;

    assert!(
        matches!(result, Err(ApiError::EmptyReason)),
        "expected EmptyReason, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_duplicate_phone() {
    let usecase = CreateBlacklistEntryUseCase {
        blacklist: MockBlacklistRepo::new(vec![test_entry(1)]),
    };

    let result = usecase
        .execute(42, create_input(Some("0812345678"), None, "second strike"))
        .await;

    assert!(
        matches!(result, Err(ApiError::PhoneTaken)),
        "expected PhoneTaken, got {result:?}"
    );
}

#[tokio::test]
async fn should_accept_instagram_only_entry() {
    let usecase = CreateBlacklistEntryUseCase {
        blacklist: MockBlacklistRepo::empty(),
    };

    let entry = usecase
        .execute(42, create_input(None, Some("ghost_guest"), "chargeback abuse"))
        .await
        .unwrap();

    assert!(entry.phone.is_none());
    assert_eq!(entry.instagram.as_deref(), Some("ghost_guest"));
}

// ── Update ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_reason_and_audit_fields() {
    let repo = MockBlacklistRepo::new(vec![test_entry(1)]);
    let entries_handle = repo.entries_handle();
    let usecase = UpdateBlacklistEntryUseCase { blacklist: repo };

    usecase
        .execute(
            99,
            1,
            UpdateBlacklistEntryInput {
                reason: Some("settled the bill, kept on watch".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let entries = entries_handle.lock().unwrap();
    assert_eq!(entries[0].reason, "settled the bill, kept on watch");
    assert_eq!(entries[0].updated_by, 99);
    assert_eq!(entries[0].created_by, 1, "creator audit field never changes");
}

#[tokio::test]
async fn should_reject_update_of_missing_entry() {
    let usecase = UpdateBlacklistEntryUseCase {
        blacklist: MockBlacklistRepo::empty(),
    };

    let result = usecase
        .execute(99, 1, UpdateBlacklistEntryInput::default())
        .await;

    assert!(
        matches!(result, Err(ApiError::EntryNotFound)),
        "expected EntryNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_update_that_clears_both_contacts() {
    let usecase = UpdateBlacklistEntryUseCase {
        blacklist: MockBlacklistRepo::new(vec![test_entry(1)]),
    };

    let result = usecase
        .execute(
            99,
            1,
            UpdateBlacklistEntryInput {
                phone: Some(None),
                instagram: Some(None),
                ..Default::default()
            },
        )
        .await;

    assert!(
        matches!(result, Err(ApiError::MissingContact)),
        "expected MissingContact, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_update_to_another_entries_phone() {
    let mut other = test_entry(2);
    other.phone = Some("0800000000".to_owned());
    let usecase = UpdateBlacklistEntryUseCase {
        blacklist: MockBlacklistRepo::new(vec![test_entry(1), other]),
    };

    let result = usecase
        .execute(
            99,
            1,
            UpdateBlacklistEntryInput {
                phone: Some(Some("0800000000".to_owned())),
                ..Default::default()
            },
        )
        .await;

    assert!(
        matches!(result, Err(ApiError::PhoneTaken)),
        "expected PhoneTaken, got {result:?}"
    );
}

#[tokio::test]
async fn should_allow_update_keeping_own_phone() {
    let usecase = UpdateBlacklistEntryUseCase {
        blacklist: MockBlacklistRepo::new(vec![test_entry(1)]),
    };

    // Unchanged phone matches only the entry itself — not a conflict.
    let result = usecase
        .execute(
            99,
            1,
            UpdateBlacklistEntryInput {
                name: Some(Some("N. Owl Jr.".to_owned())),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok(), "got {result:?}");
}

// ── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_entry() {
    let repo = MockBlacklistRepo::new(vec![test_entry(1)]);
    let entries_handle = repo.entries_handle();
    let usecase = DeleteBlacklistEntryUseCase { blacklist: repo };

    usecase.execute(1).await.unwrap();

    assert!(entries_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_delete_of_missing_entry() {
    let usecase = DeleteBlacklistEntryUseCase {
        blacklist: MockBlacklistRepo::empty(),
    };

    let result = usecase.execute(1).await;

    assert!(
        matches!(result, Err(ApiError::EntryNotFound)),
        "expected EntryNotFound, got {result:?}"
    );
}
