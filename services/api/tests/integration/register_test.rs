use velvetrope_api::error::ApiError;
use velvetrope_api::usecase::register::{RegisterInput, RegisterUseCase};

use crate::helpers::{MockMailer, MockUserRepo};

fn input(email: &str) -> RegisterInput {
    RegisterInput {
        email: email.to_owned(),
        password: "longenough".to_owned(),
        name: "Dana".to_owned(),
    }
}

#[tokio::test]
async fn should_register_and_send_verification_mail() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();
    let mailer = MockMailer::new();
    let sent_handle = mailer.sent_handle();

    let usecase = RegisterUseCase { users, mailer };
    let out = usecase.execute(input("dana@example.com")).await.unwrap();

    assert_eq!(out.email, "dana@example.com");

    let users = users_handle.lock().unwrap();
    assert_eq!(users.len(), 1);
    assert!(!users[0].email_verified);
    let stored_token = users[0].verification_token.clone().unwrap();

    let sent = sent_handle.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "dana@example.com");
    assert_eq!(
        sent[0].1, stored_token,
        "mailed token must match the stored one"
    );
}

#[tokio::test]
async fn should_reject_duplicate_email_after_case_folding() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();
    let usecase = RegisterUseCase {
        users,
        mailer: MockMailer::new(),
    };

    usecase.execute(input("test@example.com")).await.unwrap();
    let result = usecase.execute(input("Test@Example.com")).await;

    assert!(
        matches!(result, Err(ApiError::EmailTaken)),
        "expected EmailTaken, got {result:?}"
    );
    assert_eq!(users_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_delete_user_when_verification_mail_fails() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();
    let usecase = RegisterUseCase {
        users,
        mailer: MockMailer::failing(),
    };

    let result = usecase.execute(input("dana@example.com")).await;

    assert!(matches!(result, Err(ApiError::Internal(_))));
    assert!(
        users_handle.lock().unwrap().is_empty(),
        "registration must roll back the created row on mail failure"
    );
}

#[tokio::test]
async fn should_reject_invalid_email_before_touching_storage() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();
    let usecase = RegisterUseCase {
        users,
        mailer: MockMailer::new(),
    };

    let result = usecase.execute(input("not-an-email")).await;

    assert!(matches!(result, Err(ApiError::InvalidEmail)));
    assert!(users_handle.lock().unwrap().is_empty());
}
