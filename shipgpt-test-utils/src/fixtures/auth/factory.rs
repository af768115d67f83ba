//! Factory functions for login payloads.

use serde_json::{json, Value};

use crate::constant::TEST_ACCESS_TOKEN;

/// Body of a successful login for an account holding `role`
pub fn mock_login_response(role: &str, email: &str) -> Value {
    json!({
        "data": {
            "access_token": TEST_ACCESS_TOKEN,
            "user": {
                "_id": "6650f1c2a4b3c2d1e0f0aaaa",
                "email": email,
                "role": role,
                "firstName": "Test",
                "lastName": "Account",
            }
        }
    })
}
