//! Test fixture modules for JSON payloads and HTTP mock creation.
//!
//! - `auth` - login and password recovery endpoints
//! - `account` - admin, user, crew and superintendent records
//! - `ship` - ships, their details and PDF documents

pub mod account;
pub mod auth;
pub mod ship;

use serde_json::{json, Value};

/// Wrap a payload in the `{ data }` success envelope
pub fn data_body(data: Value) -> Value {
    json!({ "data": data })
}

/// Wrap records in the paginated `{ data: { docs } }` envelope
pub fn page_body(docs: Vec<Value>) -> Value {
    let total = docs.len();

    json!({
        "data": {
            "docs": docs,
            "totalDocs": total,
            "page": 1,
            "limit": 100,
            "totalPages": 1,
        }
    })
}

/// Error envelope carrying a single message
pub fn error_body(message: &str) -> Value {
    json!({ "message": message })
}

/// Error envelope carrying a list of validation messages
pub fn validation_body(messages: &[&str]) -> Value {
    json!({ "message": messages })
}
