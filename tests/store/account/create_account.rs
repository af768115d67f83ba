use mockito::Matcher;
use serde_json::json;
use shipgpt_admin::{
    client::store::{
        account::{self, AccountState},
        notification::NotificationKind,
    },
    model::account::{CreateAccountDto, Role},
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

fn new_admin(email: &str) -> CreateAccountDto {
    CreateAccountDto {
        first_name: "Ingrid".to_string(),
        last_name: "Larsen".to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        role: Role::Admin,
    }
}

#[tokio::test]
/// Expect a duplicate email to surface the backend message and settle the create flag
async fn duplicate_admin_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/admin")
                .with_status(409)
                .with_header("content-type", "application/json")
                .with_body(error_body("Email already exists").to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Superadmin);
    let mut admins = slice::<AccountState>();
    let mut notes = notifications();

    let result = account::create_account(
        &api,
        &mut admins,
        &mut notes,
        new_admin("ingrid@shipgpt.io"),
    )
    .await;

    assert!(result.is_err());
    let state = admins.borrow();
    assert_eq!(state.error.as_deref(), Some("Email already exists"));
    assert!(!state.create_loading());
    assert!(state.items.is_empty());
    let notes = notes.borrow();
    assert_eq!(notes.items[0].kind, NotificationKind::Error);
    assert_eq!(notes.items[0].message, "Email already exists");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect admins to go through the admin endpoint and never be appended locally
async fn created_admin_is_not_appended() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.account().create_admin_endpoint(
        account_factory::mock_account("a1", "ADMIN", "Ingrid", true),
        1,
    )?;
    test.mocks.push(mock);
    let (api, _storage) = test.signed_in_client(Role::Superadmin);
    let mut admins = slice::<AccountState>();
    let mut notes = notifications();

    let created = account::create_account(
        &api,
        &mut admins,
        &mut notes,
        new_admin("ingrid@shipgpt.io"),
    )
    .await
    .expect("admin is created");

    assert_eq!(created.role, Role::Admin);
    assert!(admins.borrow().items.is_empty());
    assert!(!admins.borrow().create_loading());
    assert_eq!(notes.borrow().items[0].message, "Admin created successfully");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect other roles to be posted to the users endpoint with their role
async fn crew_is_created_through_users_endpoint() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/users")
                .match_body(Matcher::PartialJson(json!({
                    "role": "CREW",
                    "email": "john@shipgpt.io",
                })))
                .with_status(201)
                .with_header("content-type", "application/json")
                .with_body(
                    data_body(account_factory::mock_account("c1", "CREW", "John", true))
                        .to_string(),
                )
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut crew = slice::<AccountState>();
    let mut notes = notifications();

    let payload = CreateAccountDto {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@shipgpt.io".to_string(),
        password: TEST_PASSWORD.to_string(),
        role: Role::Crew,
    };
    let result = account::create_account(&api, &mut crew, &mut notes, payload).await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an empty first name to be refused before any request
async fn empty_name_issues_no_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.account().create_admin_endpoint(
        account_factory::mock_account("a1", "ADMIN", "Ingrid", true),
        0,
    )?;
    test.mocks.push(mock);
    let (api, _storage) = test.signed_in_client(Role::Superadmin);
    let mut admins = slice::<AccountState>();
    let mut notes = notifications();

    let payload = CreateAccountDto {
        first_name: "   ".to_string(),
        ..new_admin("ingrid@shipgpt.io")
    };
    let result = account::create_account(&api, &mut admins, &mut notes, payload).await;

    assert!(result.is_err());
    assert_eq!(
        admins.borrow().error.as_deref(),
        Some("First name is required")
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a password below the minimum length to be refused before any request
async fn short_password_issues_no_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.account().create_admin_endpoint(
        account_factory::mock_account("a1", "ADMIN", "Ingrid", true),
        0,
    )?;
    test.mocks.push(mock);
    let (api, _storage) = test.signed_in_client(Role::Superadmin);
    let mut admins = slice::<AccountState>();
    let mut notes = notifications();

    let payload = CreateAccountDto {
        password: "short".to_string(),
        ..new_admin("ingrid@shipgpt.io")
    };
    let result = account::create_account(&api, &mut admins, &mut notes, payload).await;

    assert!(result.is_err());
    assert_eq!(
        admins.borrow().error.as_deref(),
        Some("Password must be at least 8 characters")
    );
    test.assert_mocks();

    Ok(())
}
