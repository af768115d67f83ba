use mockito::Matcher;
use serde_json::json;
use shipgpt_admin::{
    client::{
        store::ship::{self, ShipState},
        util::confirm::StatusChange,
    },
    model::account::Role,
};
use shipgpt_test_utils::prelude::*;

use crate::{
    util::test_utils::{notifications, slice},
    TestSetupExt,
};

#[tokio::test]
/// Expect a confirmed toggle to call the update endpoint once and flip the ship
async fn toggles_ship_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_list_endpoint(
            vec![ship_factory::mock_ship(TEST_SHIP_ID, "Nordic Star", TEST_SHIP_IMO, true)],
            1,
        )
        .with_mock_endpoint(|server| {
            server
                .mock("PATCH", format!("/ship/{}", TEST_SHIP_ID).as_str())
                .match_body(Matcher::Json(json!({ "isActive": false })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    data_body(ship_factory::mock_ship(
                        TEST_SHIP_ID,
                        "Nordic Star",
                        TEST_SHIP_IMO,
                        false,
                    ))
                    .to_string(),
                )
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let (api, _storage) = test.signed_in_client(Role::Admin);
    let mut ships = slice::<ShipState>();
    let mut notes = notifications();

    ship::fetch_ships(&api, &mut ships, &mut notes)
        .await
        .expect("ships load");
    assert!(ships.borrow().items[0].is_active);

    let change = StatusChange::toggle(TEST_SHIP_ID, "Nordic Star", true);
    let result = ship::set_ship_status(&api, &mut ships, &mut notes, change).await;

    assert!(result.is_ok());
    let state = ships.borrow();
    assert!(!state.items[0].is_active);
    assert!(!state.update_loading());
    assert_eq!(
        notes.borrow().items.last().map(|note| note.message.as_str()),
        Some("Ship deactivated successfully")
    );
    test.assert_mocks();

    Ok(())
}
