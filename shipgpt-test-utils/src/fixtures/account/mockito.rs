//! Auth service account endpoints.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    error::TestError,
    fixtures::{account::AccountFixtures, data_body, page_body},
};

impl<'a> AccountFixtures<'a> {
    /// Create a mock `GET /users?user_role=ROLE` endpoint listing `accounts`.
    ///
    /// # Arguments
    /// - `role` - Value the `user_role` query parameter must carry
    /// - `accounts` - Records returned in the page
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_account_list_endpoint(
        &mut self,
        role: &str,
        accounts: Vec<Value>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&page_body(accounts))?;

        Ok(self
            .setup
            .server
            .mock("GET", "/users")
            .match_query(Matcher::UrlEncoded("user_role".into(), role.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `GET /users/{id}?user_role=ROLE` endpoint returning `account`
    pub fn create_account_details_endpoint(
        &mut self,
        id: &str,
        role: &str,
        account: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&data_body(account))?;

        Ok(self
            .setup
            .server
            .mock("GET", format!("/users/{}", id).as_str())
            .match_query(Matcher::UrlEncoded("user_role".into(), role.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `PATCH /users/{id}` endpoint returning `account`
    pub fn create_account_update_endpoint(
        &mut self,
        id: &str,
        account: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&data_body(account))?;

        Ok(self
            .setup
            .server
            .mock("PATCH", format!("/users/{}", id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `POST /admin` endpoint returning the created admin
    pub fn create_admin_endpoint(
        &mut self,
        admin: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&data_body(admin))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/admin")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }
}
