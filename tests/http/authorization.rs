use mockito::Matcher;
use shipgpt_admin::{
    client::{
        service,
        store::auth::{self, AuthState},
    },
    model::{account::Role, api::PageQuery},
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

#[tokio::test]
/// Expect authenticated requests to carry the stored bearer token
async fn attaches_bearer_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/ship")
                .match_header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(page_body(Vec::new()).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);

    let result = service::ship::list_ships(&api, PageQuery::default()).await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect requests issued after logout to carry no authorization header
async fn omits_header_after_logout() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/ship")
                .match_header("authorization", Matcher::Missing)
                .with_status(401)
                .with_header("content-type", "application/json")
                .with_body(error_body("Unauthorized").to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Superadmin);
    let mut auth_state = slice::<AuthState>();
    let mut notes = notifications();

    auth::logout(&api, &mut auth_state, &mut notes).expect("memory storage never fails");
    let result = service::ship::list_ships(&api, PageQuery::default()).await;

    let err = result.expect_err("backend rejects the anonymous request");
    assert!(err.is_unauthorized());
    test.assert_mocks();

    Ok(())
}
