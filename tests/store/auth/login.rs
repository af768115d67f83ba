use mockito::Matcher;
use serde_json::json;
use shipgpt_admin::{
    client::{
        http::{session::ACCESS_TOKEN_KEY, SessionStorage},
        router::Route,
        store::{
            auth::{self, AuthState},
            notification::NotificationKind,
        },
    },
    error::{client::ClientError, Error},
    model::account::Role,
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

#[tokio::test]
/// Expect a super admin login to store the token and land on the admins screen
async fn stores_session_for_superadmin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint("SUPERADMIN", TEST_EMAIL, 1)
        .build()
        .await?;
    let (api, storage) = test.api_client();
    let mut auth_state = slice::<AuthState>();
    let mut notes = notifications();

    let session = auth::login(&api, &mut auth_state, &mut notes, TEST_EMAIL, TEST_PASSWORD)
        .await
        .expect("login succeeds");

    assert_eq!(session.role, Role::Superadmin);
    assert_eq!(session.access_token, TEST_ACCESS_TOKEN);
    assert_eq!(
        storage.get(ACCESS_TOKEN_KEY).as_deref(),
        Some(TEST_ACCESS_TOKEN)
    );
    assert_eq!(Route::landing(session.role), Route::Admins {});

    let state = auth_state.borrow();
    assert_eq!(state.session.as_ref(), Some(&session));
    assert!(!state.login_loading());
    assert!(state.error.is_none());
    assert_eq!(notes.borrow().items[0].kind, NotificationKind::Success);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a crew login to be refused without storing anything
async fn refuses_non_dashboard_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint("CREW", "crew@shipgpt.io", 1)
        .build()
        .await?;
    let (api, storage) = test.api_client();
    let mut auth_state = slice::<AuthState>();
    let mut notes = notifications();

    let result =
        auth::login(&api, &mut auth_state, &mut notes, "crew@shipgpt.io", TEST_PASSWORD).await;

    assert!(matches!(
        result,
        Err(Error::Client(ClientError::UnsupportedRole(Role::Crew)))
    ));
    assert!(!storage.contains(ACCESS_TOKEN_KEY));
    assert!(api.session().is_none());

    let state = auth_state.borrow();
    assert!(state.session.is_none());
    assert!(state.error.is_some());
    assert_eq!(notes.borrow().items[0].kind, NotificationKind::Error);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect rejected credentials to surface the backend message
async fn records_backend_rejection() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .auth()
        .create_login_rejected_endpoint("Invalid credentials", 1)?;
    test.mocks.push(mock);
    let (api, storage) = test.api_client();
    let mut auth_state = slice::<AuthState>();
    let mut notes = notifications();

    let result = auth::login(&api, &mut auth_state, &mut notes, TEST_EMAIL, "wrong-password").await;

    assert!(result.is_err());
    assert_eq!(auth_state.borrow().error.as_deref(), Some("Invalid credentials"));
    assert!(!auth_state.borrow().login_loading());
    assert!(!storage.contains(ACCESS_TOKEN_KEY));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a malformed email to be refused before any request is sent
async fn invalid_email_issues_no_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint("SUPERADMIN", "not-an-email", 0)
        .build()
        .await?;
    let (api, _storage) = test.api_client();
    let mut auth_state = slice::<AuthState>();
    let mut notes = notifications();

    let result = auth::login(&api, &mut auth_state, &mut notes, "not-an-email", TEST_PASSWORD).await;

    assert!(matches!(
        result,
        Err(Error::Client(ClientError::InvalidEmail))
    ));
    assert_eq!(
        auth_state.borrow().error.as_deref(),
        Some("Please enter a valid email address")
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the password to be sent exactly as typed, surrounding whitespace included
async fn sends_password_untrimmed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/login")
                .match_body(Matcher::PartialJson(json!({
                    "email": TEST_EMAIL,
                    "password": "  spaced pass  ",
                })))
                .with_status(201)
                .with_header("content-type", "application/json")
                .with_body(auth_factory::mock_login_response("ADMIN", TEST_EMAIL).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.api_client();
    let mut auth_state = slice::<AuthState>();
    let mut notes = notifications();

    let session = auth::login(&api, &mut auth_state, &mut notes, TEST_EMAIL, "  spaced pass  ")
        .await
        .expect("login succeeds");

    assert_eq!(session.role, Role::Admin);
    test.assert_mocks();

    Ok(())
}
