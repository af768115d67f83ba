use shipgpt_admin::{
    client::store::ship::{self, ShipState},
    model::{account::Role, ship::ShipDetailsDto},
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

#[tokio::test]
/// Expect a deleted document to disappear from the open ship only
async fn removes_document_from_open_ship() -> Result<(), TestError> {
    let details = ship_factory::mock_ship_details(
        ship_factory::mock_ship(TEST_SHIP_ID, "Nordic Star", TEST_SHIP_IMO, true),
        Vec::new(),
        Vec::new(),
        vec![
            ship_factory::mock_document("d1", TEST_SHIP_ID, "COMPLIANCE", "survey.pdf"),
            ship_factory::mock_document("d2", TEST_SHIP_ID, "CREWING", "roster.pdf"),
        ],
    );
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", "/pdf/d1")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message":"Deleted"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut ships = slice::<ShipState>();
    ships.borrow_mut().selected = Some(serde_json::from_value::<ShipDetailsDto>(details)?);
    let mut notes = notifications();

    let result = ship::delete_document(&api, &mut ships, &mut notes, TEST_SHIP_ID, "d1").await;

    assert!(result.is_ok());
    let state = ships.borrow();
    let pdfs = &state.selected.as_ref().expect("ship stays open").pdfs;
    assert_eq!(pdfs.len(), 1);
    assert_eq!(pdfs[0].id, "d2");
    assert!(!state.deleting_document());
    test.assert_mocks();

    Ok(())
}
