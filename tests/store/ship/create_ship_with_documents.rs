use shipgpt_admin::{
    client::store::ship::{self, PickedFile, ShipState},
    config::SHIP_DETAILS_UPLOAD_LIMIT,
    model::{account::Role, document::DocumentCategory, ship::CreateShipDto},
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

fn picked(name: &str, category: DocumentCategory) -> PickedFile {
    PickedFile {
        category,
        file_name: name.to_string(),
        bytes: b"%PDF-1.7\n".to_vec(),
    }
}

#[tokio::test]
/// Expect the ship to survive a failed upload while other uploads still go through
async fn failed_upload_keeps_ship() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/pdf/upload")
                .with_status(500)
                .with_header("content-type", "application/json")
                .with_body(error_body("Storage bucket unavailable").to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let created = test.ship().create_ship_create_endpoint(
        ship_factory::mock_ship(TEST_SHIP_ID, "Nordic Star", TEST_SHIP_IMO, true),
        1,
    )?;
    let uploaded = test.ship().create_upload_endpoint(
        ship_factory::mock_document("d2", TEST_SHIP_ID, "CREWING", "roster.pdf"),
        1,
    )?;
    test.mocks.extend([created, uploaded]);
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut ships = slice::<ShipState>();
    let mut notes = notifications();

    let payload = CreateShipDto {
        name: "Nordic Star".to_string(),
        imo: TEST_SHIP_IMO.to_string(),
    };
    let files = vec![
        picked("survey.pdf", DocumentCategory::Compliance),
        picked("roster.pdf", DocumentCategory::Crewing),
        picked("notes.txt", DocumentCategory::Mechanical),
    ];

    let creation = ship::create_ship_with_documents(
        &api,
        &mut ships,
        &mut notes,
        payload,
        files,
        SHIP_DETAILS_UPLOAD_LIMIT,
    )
    .await
    .expect("ship is created");

    assert_eq!(creation.ship.id, TEST_SHIP_ID);
    assert_eq!(creation.uploaded.len(), 1);
    assert_eq!(creation.uploaded[0].original_file_name, "roster.pdf");
    let failed: Vec<&str> = creation
        .failed
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(failed, vec!["survey.pdf", "notes.txt"]);
    assert!(!ships.borrow().create_loading());
    assert!(!ships.borrow().uploading());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect nothing to be uploaded when the ship itself is rejected
async fn rejected_ship_uploads_nothing() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/ship")
                .with_status(409)
                .with_header("content-type", "application/json")
                .with_body(error_body("IMO already registered").to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let upload = test.ship().create_upload_endpoint(
        ship_factory::mock_document("d1", TEST_SHIP_ID, "COMPLIANCE", "survey.pdf"),
        0,
    )?;
    test.mocks.push(upload);
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut ships = slice::<ShipState>();
    let mut notes = notifications();

    let payload = CreateShipDto {
        name: "Nordic Star".to_string(),
        imo: TEST_SHIP_IMO.to_string(),
    };
    let result = ship::create_ship_with_documents(
        &api,
        &mut ships,
        &mut notes,
        payload,
        vec![picked("survey.pdf", DocumentCategory::Compliance)],
        SHIP_DETAILS_UPLOAD_LIMIT,
    )
    .await;

    assert!(result.is_err());
    assert_eq!(ships.borrow().error.as_deref(), Some("IMO already registered"));
    test.assert_mocks();

    Ok(())
}
