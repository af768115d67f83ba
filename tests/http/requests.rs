use mockito::Matcher;
use shipgpt_admin::{client::service, model::account::Role};
use shipgpt_test_utils::prelude::*;

use crate::TestSetupExt;

#[tokio::test]
/// Expect a single account to be fetched with its role as a query parameter
async fn get_account_sends_role() -> Result<(), TestError> {
    let account = account_factory::mock_account("c1", "CREW", "John", true);
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", "/users/c1")
                .match_query(Matcher::UrlEncoded("user_role".into(), "CREW".into()))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(data_body(account).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);

    let account = service::account::get_account(&api, "c1", Role::Crew)
        .await
        .expect("account is returned");

    assert_eq!(account.id, "c1");
    assert_eq!(account.role, Role::Crew);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect deletes to succeed on an empty response body
async fn delete_account_accepts_empty_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", "/users/u1")
                .with_status(204)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Superadmin);

    let result = service::account::delete_account(&api, "u1").await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}
