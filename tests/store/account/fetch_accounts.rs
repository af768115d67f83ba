use shipgpt_admin::{
    client::store::{
        account::{self, AccountState},
        notification::NotificationKind,
    },
    model::account::Role,
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

#[tokio::test]
/// Expect the crew list to replace the slice items and clear the loading flag
async fn loads_crew_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_list_endpoint(
            "CREW",
            vec![
                account_factory::mock_account("c1", "CREW", "John", true),
                account_factory::mock_account("c2", "CREW", "Maria", false),
            ],
            1,
        )
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut crew = slice::<AccountState>();
    let mut notes = notifications();

    let result = account::fetch_accounts(&api, &mut crew, &mut notes, Role::Crew).await;

    assert!(result.is_ok());
    let state = crew.borrow();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].first_name, "John");
    assert!(!state.items[1].is_active);
    assert!(!state.loading());
    assert!(state.error.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed fetch to keep the previous items and record the error
async fn rejected_fetch_keeps_items() -> Result<(), TestError> {
    let accounts = vec![account_factory::mock_account("u1", "USER", "Ava", true)];
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", "/users")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(page_body(accounts).to_string())
                .expect(1)
                .create()
        })
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/users")
                .with_status(503)
                .with_header("content-type", "application/json")
                .with_body(error_body("Service unavailable").to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut users = slice::<AccountState>();
    let mut notes = notifications();

    account::fetch_accounts(&api, &mut users, &mut notes, Role::User)
        .await
        .expect("first fetch succeeds");
    let result = account::fetch_accounts(&api, &mut users, &mut notes, Role::User).await;

    assert!(result.is_err());
    let state = users.borrow();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].first_name, "Ava");
    assert_eq!(state.error.as_deref(), Some("Service unavailable"));
    assert!(!state.loading());
    assert_eq!(notes.borrow().items[0].kind, NotificationKind::Error);
    test.assert_mocks();

    Ok(())
}
