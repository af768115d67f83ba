//! Factory functions for account records as the auth service returns them.

use chrono::Utc;
use serde_json::{json, Value};

/// Create an account record.
///
/// # Arguments
/// - `id` - Backend id of the account
/// - `role` - Role in SCREAMING_CASE, e.g. `CREW`
/// - `first_name` - First name, the last name is always `Doe`
/// - `is_active` - Whether the account is active
pub fn mock_account(id: &str, role: &str, first_name: &str, is_active: bool) -> Value {
    let now = Utc::now().to_rfc3339();

    json!({
        "_id": id,
        "firstName": first_name,
        "lastName": "Doe",
        "email": format!("{}.doe+{}@shipgpt.io", first_name.to_lowercase(), id),
        "role": role,
        "isActive": is_active,
        "createdAt": now,
        "updatedAt": now,
    })
}

/// Account reference as embedded in ship details
pub fn mock_account_ref(id: &str, first_name: &str) -> Value {
    json!({
        "_id": id,
        "firstName": first_name,
        "lastName": "Doe",
        "email": format!("{}.doe+{}@shipgpt.io", first_name.to_lowercase(), id),
    })
}
