use shipgpt_admin::client::store::{
    auth::{self, AuthState},
    notification::NotificationKind,
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

#[tokio::test]
/// Expect an invalid email to be refused without contacting the backend
async fn invalid_email_issues_no_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.auth().create_forgot_password_endpoint(0)?;
    test.mocks.push(mock);
    let (api, _storage) = test.api_client();
    let mut auth_state = slice::<AuthState>();
    let mut notes = notifications();

    let result = auth::forgot_password(&api, &mut auth_state, &mut notes, "captain@").await;

    assert!(result.is_err());
    assert!(auth_state.borrow().otp_email.is_none());
    assert!(!auth_state.borrow().forgot_loading());
    assert_eq!(notes.borrow().items[0].kind, NotificationKind::Error);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the OTP email to be carried from the request to the reset call
async fn reset_uses_requested_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let forgot = test.auth().create_forgot_password_endpoint(1)?;
    let reset = test
        .auth()
        .create_reset_password_endpoint(TEST_EMAIL, "482913", 1)?;
    test.mocks.extend([forgot, reset]);
    let (api, _storage) = test.api_client();
    let mut auth_state = slice::<AuthState>();
    let mut notes = notifications();

    auth::forgot_password(&api, &mut auth_state, &mut notes, TEST_EMAIL)
        .await
        .expect("OTP request succeeds");
    assert_eq!(auth_state.borrow().otp_email.as_deref(), Some(TEST_EMAIL));

    auth::reset_password(
        &api,
        &mut auth_state,
        &mut notes,
        "482913",
        "new-password-1",
        "new-password-1",
    )
    .await
    .expect("reset succeeds");

    assert!(auth_state.borrow().otp_email.is_none());
    assert_eq!(
        notes.borrow().items.last().map(|note| note.message.as_str()),
        Some("Password reset successfully")
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect mismatched passwords to be refused before the reset request
async fn mismatched_passwords_issue_no_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .auth()
        .create_reset_password_endpoint(TEST_EMAIL, "482913", 0)?;
    test.mocks.push(mock);
    let (api, _storage) = test.api_client();
    let mut auth_state = slice::<AuthState>();
    auth_state.borrow_mut().otp_email = Some(TEST_EMAIL.to_string());
    let mut notes = notifications();

    let result = auth::reset_password(
        &api,
        &mut auth_state,
        &mut notes,
        "482913",
        "new-password-1",
        "new-password-2",
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        auth_state.borrow().error.as_deref(),
        Some("Passwords do not match")
    );
    assert_eq!(auth_state.borrow().otp_email.as_deref(), Some(TEST_EMAIL));
    test.assert_mocks();

    Ok(())
}
