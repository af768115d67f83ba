use shipgpt_admin::{
    client::store::{
        account::{self, AccountState},
        notification::NotificationKind,
    },
    model::account::{AccountDto, Role},
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

#[tokio::test]
/// Expect the fetched account to become the selection while the list stays as it was
async fn populates_selected_account() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.account().create_account_details_endpoint(
        "s1",
        "SUPERINTENDENT",
        account_factory::mock_account("s1", "SUPERINTENDENT", "Ingrid", true),
        1,
    )?;
    test.mocks.push(mock);
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut superintendents = slice::<AccountState>();
    let listed: AccountDto = serde_json::from_value(account_factory::mock_account(
        "s2",
        "SUPERINTENDENT",
        "Lars",
        true,
    ))?;
    superintendents.borrow_mut().items = vec![listed.clone()];
    let mut notes = notifications();

    let result = account::fetch_account_details(
        &api,
        &mut superintendents,
        &mut notes,
        "s1",
        Role::Superintendent,
    )
    .await;

    assert!(result.is_ok());
    let state = superintendents.borrow();
    let selected = state.selected.as_ref().expect("account is selected");
    assert_eq!(selected.id, "s1");
    assert_eq!(selected.first_name, "Ingrid");
    assert_eq!(state.items, vec![listed]);
    assert!(!state.details_loading());
    assert!(state.error.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a rejected fetch to record the error and keep the current selection
async fn rejected_fetch_keeps_selection() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/users/missing")
                .with_status(404)
                .with_header("content-type", "application/json")
                .with_body(error_body("User not found").to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut crew = slice::<AccountState>();
    let current: AccountDto =
        serde_json::from_value(account_factory::mock_account("c1", "CREW", "John", true))?;
    crew.borrow_mut().selected = Some(current.clone());
    let mut notes = notifications();

    let result =
        account::fetch_account_details(&api, &mut crew, &mut notes, "missing", Role::Crew).await;

    assert!(result.is_err());
    let state = crew.borrow();
    assert_eq!(state.selected, Some(current));
    assert_eq!(state.error.as_deref(), Some("User not found"));
    assert!(!state.details_loading());
    let notes = notes.borrow();
    assert_eq!(notes.items.len(), 1);
    assert_eq!(notes.items[0].kind, NotificationKind::Error);
    test.assert_mocks();

    Ok(())
}
