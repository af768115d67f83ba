use shipgpt_admin::{
    client::store::ship::{self, ShipState},
    model::account::Role,
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

#[tokio::test]
/// Expect a deleted ship to leave the list and the details view
async fn removes_ship_and_clears_selection() -> Result<(), TestError> {
    let nordic = ship_factory::mock_ship(TEST_SHIP_ID, "Nordic Star", TEST_SHIP_IMO, true);
    let baltic = ship_factory::mock_ship("6650f1c2a4b3c2d1e0f00002", "Baltic Dawn", "9456712", true);
    let details =
        ship_factory::mock_ship_details(nordic.clone(), Vec::new(), Vec::new(), Vec::new());
    let test = TestBuilder::new()
        .with_ship_list_endpoint(vec![nordic, baltic], 1)
        .with_ship_details_endpoint(TEST_SHIP_ID, details, 1)
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", format!("/ship/{}", TEST_SHIP_ID).as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message":"Ship deleted"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Superadmin);
    let mut ships = slice::<ShipState>();
    let mut notes = notifications();

    ship::fetch_ships(&api, &mut ships, &mut notes).await.expect("ships load");
    ship::fetch_ship_details(&api, &mut ships, &mut notes, TEST_SHIP_ID)
        .await
        .expect("details load");

    let result = ship::delete_ship(&api, &mut ships, &mut notes, TEST_SHIP_ID).await;

    assert!(result.is_ok());
    let state = ships.borrow();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Baltic Dawn");
    assert!(state.selected.is_none());
    assert!(!state.remove_loading());
    test.assert_mocks();

    Ok(())
}
