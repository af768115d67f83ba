//! Standard values shared by fixtures and tests.
//!
//! None of these are real credentials.

/// Bearer token returned by the mocked login endpoint
pub static TEST_ACCESS_TOKEN: &str = "test-access-token";

/// Email of the signed-in test account
pub static TEST_EMAIL: &str = "superadmin@shipgpt.io";

/// Password accepted by the client-side checks
pub static TEST_PASSWORD: &str = "correct-horse-battery";

/// Id of the ship most fixtures attach to
pub static TEST_SHIP_ID: &str = "6650f1c2a4b3c2d1e0f00001";

/// IMO number of the test ship
pub static TEST_SHIP_IMO: &str = "9321483";
