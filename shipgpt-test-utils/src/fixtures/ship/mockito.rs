//! Ship service HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    error::TestError,
    fixtures::{data_body, page_body, ship::ShipFixtures},
};

impl<'a> ShipFixtures<'a> {
    /// Create a mock `GET /ship` endpoint listing `ships`
    pub fn create_ship_list_endpoint(
        &mut self,
        ships: Vec<Value>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&page_body(ships))?;

        Ok(self
            .setup
            .server
            .mock("GET", "/ship")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `GET /ship/{id}` endpoint returning `details`
    pub fn create_ship_details_endpoint(
        &mut self,
        id: &str,
        details: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&data_body(details))?;

        Ok(self
            .setup
            .server
            .mock("GET", format!("/ship/{}", id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `PATCH /ship/{id}` endpoint returning the updated `ship`
    pub fn create_ship_update_endpoint(
        &mut self,
        id: &str,
        ship: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&data_body(ship))?;

        Ok(self
            .setup
            .server
            .mock("PATCH", format!("/ship/{}", id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `POST /ship` endpoint returning the created `ship`
    pub fn create_ship_create_endpoint(
        &mut self,
        ship: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&data_body(ship))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/ship")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `POST /pdf/upload` endpoint returning `document`
    pub fn create_upload_endpoint(
        &mut self,
        document: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&data_body(document))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/pdf/upload")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `POST /pdf/upload` endpoint only matching the expected multipart form.
    ///
    /// # Arguments
    /// - `ship_id` - Expected `shipId` field
    /// - `category` - Expected `type` field, e.g. `MECHANICAL`
    /// - `file_name` - Expected file name of the `file` part
    /// - `document` - Document record returned on a match
    /// - `expected_requests` - Number of matching uploads expected
    pub fn create_multipart_upload_endpoint(
        &mut self,
        ship_id: &str,
        category: &str,
        file_name: &str,
        document: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&data_body(document))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/pdf/upload")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(format!(r#"name="shipId"\r\n\r\n{}\r\n"#, ship_id)),
                Matcher::Regex(format!(r#"name="type"\r\n\r\n{}\r\n"#, category)),
                Matcher::Regex(format!(
                    r#"name="file"; filename="{}""#,
                    regex_escape(file_name)
                )),
            ]))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }
}

fn regex_escape(value: &str) -> String {
    value.replace('.', "\\.")
}
