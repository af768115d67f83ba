use shipgpt_admin::{
    client::store::{
        notification::NotificationKind,
        ship::{self, ShipState},
    },
    config::{DOCUMENTS_UPLOAD_LIMIT, SHIP_DETAILS_UPLOAD_LIMIT},
    error::{client::ClientError, Error},
    model::{account::Role, document::DocumentCategory, ship::ShipDetailsDto},
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

fn pdf(size: usize) -> Vec<u8> {
    let mut bytes = b"%PDF-1.7\n".to_vec();
    bytes.resize(size.max(bytes.len()), b' ');
    bytes
}

#[tokio::test]
/// Expect a file over the ceiling to be refused without a request
async fn oversized_file_issues_no_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.ship().create_upload_endpoint(
        ship_factory::mock_document("d1", TEST_SHIP_ID, "COMPLIANCE", "survey.pdf"),
        0,
    )?;
    test.mocks.push(mock);
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut ships = slice::<ShipState>();
    let mut notes = notifications();

    let result = ship::upload_document(
        &api,
        &mut ships,
        &mut notes,
        Some(TEST_SHIP_ID),
        DocumentCategory::Compliance,
        "survey.pdf",
        pdf(DOCUMENTS_UPLOAD_LIMIT as usize + 1),
        DOCUMENTS_UPLOAD_LIMIT,
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::Client(ClientError::FileTooLarge { .. }))
    ));
    assert!(!ships.borrow().uploading());
    let notes = notes.borrow();
    assert_eq!(notes.items.len(), 1);
    assert_eq!(notes.items[0].kind, NotificationKind::Error);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an upload without a selected ship to be refused without a request
async fn missing_ship_issues_no_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.ship().create_upload_endpoint(
        ship_factory::mock_document("d1", TEST_SHIP_ID, "CREWING", "roster.pdf"),
        0,
    )?;
    test.mocks.push(mock);
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut ships = slice::<ShipState>();
    let mut notes = notifications();

    let result = ship::upload_document(
        &api,
        &mut ships,
        &mut notes,
        None,
        DocumentCategory::Crewing,
        "roster.pdf",
        pdf(1024),
        DOCUMENTS_UPLOAD_LIMIT,
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::Client(ClientError::NoShipSelected))
    ));
    assert_eq!(notes.borrow().items[0].message, "Please select a ship first");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the multipart upload to match the form fields and join the open ship's documents
async fn appends_uploaded_document() -> Result<(), TestError> {
    let details = ship_factory::mock_ship_details(
        ship_factory::mock_ship(TEST_SHIP_ID, "Nordic Star", TEST_SHIP_IMO, true),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );
    let mut test = TestBuilder::new().build().await?;
    let mock = test.ship().create_multipart_upload_endpoint(
        TEST_SHIP_ID,
        "MECHANICAL",
        "engine-log.pdf",
        ship_factory::mock_document("d1", TEST_SHIP_ID, "MECHANICAL", "engine-log.pdf"),
        1,
    )?;
    test.mocks.push(mock);
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut ships = slice::<ShipState>();
    ships.borrow_mut().selected = Some(serde_json::from_value::<ShipDetailsDto>(details)?);
    let mut notes = notifications();

    let document = ship::upload_document(
        &api,
        &mut ships,
        &mut notes,
        Some(TEST_SHIP_ID),
        DocumentCategory::Mechanical,
        "engine-log.pdf",
        pdf(2048),
        SHIP_DETAILS_UPLOAD_LIMIT,
    )
    .await
    .expect("upload succeeds");

    assert_eq!(document.category, DocumentCategory::Mechanical);
    let state = ships.borrow();
    let selected = state.selected.as_ref().expect("ship stays open");
    assert_eq!(selected.pdfs.len(), 1);
    assert_eq!(selected.pdfs[0].original_file_name, "engine-log.pdf");
    assert!(!state.uploading());
    test.assert_mocks();

    Ok(())
}
