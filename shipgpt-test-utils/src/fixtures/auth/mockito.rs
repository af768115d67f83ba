//! Auth service HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    error::TestError,
    fixtures::{auth::factory, auth::AuthFixtures, error_body},
};

impl<'a> AuthFixtures<'a> {
    /// Create a mock `POST /login` endpoint signing in an account holding `role`.
    ///
    /// # Arguments
    /// - `role` - Role reported for the signed-in account, e.g. `SUPERADMIN`
    /// - `email` - Email the request must carry and the response reports
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_login_endpoint(
        &mut self,
        role: &str,
        email: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&factory::mock_login_response(role, email))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/login")
            .match_body(Matcher::PartialJson(json!({ "email": email })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `POST /login` endpoint rejecting the credentials
    pub fn create_login_rejected_endpoint(
        &mut self,
        message: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&error_body(message))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/login")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `POST /forgot-password` endpoint acknowledging the request
    pub fn create_forgot_password_endpoint(
        &mut self,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&json!({ "message": "OTP sent to your email" }))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/forgot-password")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `POST /reset-password` endpoint accepting the new password
    pub fn create_reset_password_endpoint(
        &mut self,
        email: &str,
        otp: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&json!({ "message": "Password reset successfully" }))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/reset-password")
            .match_body(Matcher::PartialJson(json!({ "email": email, "otp": otp })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }
}
