//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the mock backend before a test
//! runs. Methods can be chained together, with all endpoints queued and created during the
//! final `build()` call.

use mockito::{Mock, ServerGuard};
use serde_json::Value;

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides shortcuts for the common backend endpoints plus an escape hatch for custom
/// mocks. Finalize with `build()` to start the mock server and register every endpoint.
pub struct TestBuilder {
    // Custom mock endpoints
    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    login_endpoints: Vec<(String, String, usize)>, // (role, email, expected_requests)
    account_list_endpoints: Vec<(String, Vec<Value>, usize)>, // (role, accounts, expected_requests)
    ship_list_endpoints: Vec<(Vec<Value>, usize)>,
    ship_details_endpoints: Vec<(String, Value, usize)>, // (ship_id, details, expected_requests)
    ship_update_endpoints: Vec<(String, Value, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            login_endpoints: Vec::new(),
            account_list_endpoints: Vec::new(),
            ship_list_endpoints: Vec::new(),
            ship_details_endpoints: Vec::new(),
            ship_update_endpoints: Vec::new(),
        }
    }

    /// Add a custom mock endpoint.
    ///
    /// The closure receives the mock server and returns the created mock. Custom endpoints
    /// are created before the shortcuts, so a test can register an error response ahead of
    /// a success response for the same path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shipgpt_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), shipgpt_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server
    ///             .mock("DELETE", "/pdf/d1")
    ///             .with_status(200)
    ///             .with_body("{}")
    ///             .expect(1)
    ///             .create()
    ///     })
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Mock `POST /login` signing in an account holding `role`
    pub fn with_login_endpoint(mut self, role: &str, email: &str, expected_requests: usize) -> Self {
        self.login_endpoints
            .push((role.to_string(), email.to_string(), expected_requests));
        self
    }

    /// Mock `GET /users?user_role=ROLE` listing `accounts`
    pub fn with_account_list_endpoint(
        mut self,
        role: &str,
        accounts: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.account_list_endpoints
            .push((role.to_string(), accounts, expected_requests));
        self
    }

    /// Mock `GET /ship` listing `ships`
    pub fn with_ship_list_endpoint(mut self, ships: Vec<Value>, expected_requests: usize) -> Self {
        self.ship_list_endpoints.push((ships, expected_requests));
        self
    }

    /// Mock `GET /ship/{id}` returning `details`
    pub fn with_ship_details_endpoint(
        mut self,
        ship_id: &str,
        details: Value,
        expected_requests: usize,
    ) -> Self {
        self.ship_details_endpoints
            .push((ship_id.to_string(), details, expected_requests));
        self
    }

    /// Mock `PATCH /ship/{id}` returning the updated `ship`
    pub fn with_ship_update_endpoint(
        mut self,
        ship_id: &str,
        ship: Value,
        expected_requests: usize,
    ) -> Self {
        self.ship_update_endpoints
            .push((ship_id.to_string(), ship, expected_requests));
        self
    }

    /// Start the mock server and create every queued endpoint
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (role, email, expected) in self.login_endpoints {
            mocks.push(setup.auth().create_login_endpoint(&role, &email, expected)?);
        }

        for (role, accounts, expected) in self.account_list_endpoints {
            mocks.push(
                setup
                    .account()
                    .create_account_list_endpoint(&role, accounts, expected)?,
            );
        }

        for (ships, expected) in self.ship_list_endpoints {
            mocks.push(setup.ship().create_ship_list_endpoint(ships, expected)?);
        }

        for (ship_id, details, expected) in self.ship_details_endpoints {
            mocks.push(
                setup
                    .ship()
                    .create_ship_details_endpoint(&ship_id, details, expected)?,
            );
        }

        for (ship_id, ship, expected) in self.ship_update_endpoints {
            mocks.push(
                setup
                    .ship()
                    .create_ship_update_endpoint(&ship_id, ship, expected)?,
            );
        }

        // Mocks live as long as the setup
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
