use shipgpt_admin::{
    client::service,
    error::{Error, GENERIC_ERROR_MESSAGE},
    model::{account::Role, ship::UpdateShipDto},
};
use shipgpt_test_utils::prelude::*;

use crate::TestSetupExt;

#[tokio::test]
/// Expect a list of backend messages to surface joined as one message
async fn validation_messages_are_joined() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("PATCH", "/ship/s1")
                .with_status(400)
                .with_header("content-type", "application/json")
                .with_body(validation_body(&["name must be a string", "IMO is invalid"]).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);

    let result = service::ship::update_ship(&api, "s1", &UpdateShipDto::status(false)).await;

    let err = result.expect_err("backend rejects the patch");
    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(err.user_message(), "name must be a string, IMO is invalid");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a body without any message to fall back to the generic message
async fn empty_error_body_uses_generic_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", "/pdf/d1")
                .with_status(500)
                .with_body("<html>Internal Server Error</html>")
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);

    let result = service::document::delete_pdf(&api, "d1").await;

    let err = result.expect_err("backend fails");
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a success body of the wrong shape to be reported as a decode failure
async fn malformed_success_body_is_decode_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/ship/s1")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"data":{"name":"missing everything else"}}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);

    let result = service::ship::get_ship(&api, "s1").await;

    assert!(matches!(result, Err(Error::Decode(_))));
    test.assert_mocks();

    Ok(())
}
