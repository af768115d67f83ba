use mockito::Matcher;
use serde_json::json;
use shipgpt_admin::{
    client::{
        store::account::{self, AccountState},
        util::confirm::StatusChange,
    },
    model::account::{AccountDto, Role},
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

#[tokio::test]
/// Expect a confirmed deactivation to patch once and flip only the matching row
async fn deactivates_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("PATCH", "/users/u1")
                .match_body(Matcher::Json(json!({ "isActive": false })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    data_body(account_factory::mock_account("u1", "USER", "Ava", false))
                        .to_string(),
                )
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut users = slice::<AccountState>();
    let mut notes = notifications();

    let existing: Vec<AccountDto> = serde_json::from_value(json!([
        account_factory::mock_account("u1", "USER", "Ava", true),
        account_factory::mock_account("u2", "USER", "Ben", true),
    ]))?;
    users.borrow_mut().items = existing;

    let change = StatusChange::toggle("u1", "Ava Doe", true);
    let result = account::set_account_status(&api, &mut users, &mut notes, change).await;

    assert!(result.is_ok());
    let state = users.borrow();
    assert!(!state.items[0].is_active);
    assert!(state.items[1].is_active);
    assert!(!state.update_loading());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a rejected toggle to leave the row as it was
async fn rejected_toggle_keeps_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("PATCH", "/users/u1")
                .with_status(403)
                .with_header("content-type", "application/json")
                .with_body(error_body("Forbidden resource").to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut users = slice::<AccountState>();
    let mut notes = notifications();
    users.borrow_mut().items = serde_json::from_value(json!([account_factory::mock_account(
        "u1", "USER", "Ava", true
    )]))?;

    let change = StatusChange::toggle("u1", "Ava Doe", true);
    let result = account::set_account_status(&api, &mut users, &mut notes, change).await;

    assert!(result.is_err());
    let state = users.borrow();
    assert!(state.items[0].is_active);
    assert_eq!(state.error.as_deref(), Some("Forbidden resource"));
    test.assert_mocks();

    Ok(())
}
