use chrono::{Duration, Utc};

use velvetrope_api::error::ApiError;
use velvetrope_api::usecase::verify_email::{ResendVerificationUseCase, VerifyEmailUseCase};

use crate::helpers::{MockMailer, MockUserRepo, unverified_user, verified_user};
use velvetrope_domain::user::UserRole;

#[tokio::test]
async fn should_verify_email_and_clear_token() {
    let users = MockUserRepo::new(vec![unverified_user(1, "dana@example.com", "TOKEN123")]);
    let users_handle = users.users_handle();

    let usecase = VerifyEmailUseCase { users };
    let out = usecase.execute("TOKEN123").await.unwrap();

    assert_eq!(out.email, "dana@example.com");
    let users = users_handle.lock().unwrap();
    assert!(users[0].email_verified);
    assert!(users[0].verification_token.is_none());
    assert!(users[0].verification_expires_at.is_none());
}

#[tokio::test]
async fn should_reject_unknown_verification_token() {
    let usecase = VerifyEmailUseCase {
        users: MockUserRepo::new(vec![unverified_user(1, "dana@example.com", "TOKEN123")]),
    };

    let result = usecase.execute("WRONG").await;

    assert!(
        matches!(result, Err(ApiError::InvalidVerificationToken)),
        "expected InvalidVerificationToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_expired_token_without_flipping_flag() {
    let mut user = unverified_user(1, "dana@example.com", "TOKEN123");
    user.verification_expires_at = Some(Utc::now() - Duration::seconds(60));
    let users = MockUserRepo::new(vec![user]);
    let users_handle = users.users_handle();

    let usecase = VerifyEmailUseCase { users };
    let result = usecase.execute("TOKEN123").await;

    assert!(
        matches!(result, Err(ApiError::VerificationTokenExpired)),
        "expected VerificationTokenExpired, got {result:?}"
    );
    assert!(
        !users_handle.lock().unwrap()[0].email_verified,
        "expired verification must not change the verified flag"
    );
}

#[tokio::test]
async fn should_acknowledge_resend_for_unknown_email_without_sending() {
    let mailer = MockMailer::new();
    let sent_handle = mailer.sent_handle();
    let usecase = ResendVerificationUseCase {
        users: MockUserRepo::empty(),
        mailer,
    };

    // No existence leak: unknown address gets the same Ok as a known one.
    usecase.execute("nobody@example.com").await.unwrap();

    assert!(sent_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_resend_for_already_verified_email() {
    let usecase = ResendVerificationUseCase {
        users: MockUserRepo::new(vec![verified_user(1, "dana@example.com", UserRole::Member)]),
        mailer: MockMailer::new(),
    };

    let result = usecase.execute("dana@example.com").await;

    assert!(
        matches!(result, Err(ApiError::AlreadyVerified)),
        "expected AlreadyVerified, got {result:?}"
    );
}

#[tokio::test]
async fn should_replace_token_on_resend() {
    let users = MockUserRepo::new(vec![unverified_user(1, "dana@example.com", "OLDTOKEN")]);
    let users_handle = users.users_handle();
    let mailer = MockMailer::new();
    let sent_handle = mailer.sent_handle();

    let usecase = ResendVerificationUseCase { users, mailer };
    usecase.execute("Dana@Example.com").await.unwrap();

    let users = users_handle.lock().unwrap();
    let new_token = users[0].verification_token.clone().unwrap();
    assert_ne!(new_token, "OLDTOKEN", "resend must rotate the token");

    let sent = sent_handle.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1, new_token);
}
