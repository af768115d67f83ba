//! Factory functions for ships and documents as the ship service returns them.

use chrono::Utc;
use serde_json::{json, Value};

pub fn mock_ship(id: &str, name: &str, imo: &str, is_active: bool) -> Value {
    let now = Utc::now().to_rfc3339();

    json!({
        "_id": id,
        "name": name,
        "IMO": imo,
        "isActive": is_active,
        "createdAt": now,
        "updatedAt": now,
    })
}

/// Ship details: the ship record with assignments and documents embedded
pub fn mock_ship_details(
    ship: Value,
    crew_members: Vec<Value>,
    superintendents: Vec<Value>,
    pdfs: Vec<Value>,
) -> Value {
    let mut details = ship;
    details["crewMembers"] = Value::Array(crew_members);
    details["superintendents"] = Value::Array(superintendents);
    details["pdfs"] = Value::Array(pdfs);

    details
}

/// PDF document record.
///
/// # Arguments
/// - `id` - Backend id of the document
/// - `ship_id` - Ship the document belongs to
/// - `category` - `COMPLIANCE`, `CREWING` or `MECHANICAL`
/// - `file_name` - Original file name
pub fn mock_document(id: &str, ship_id: &str, category: &str, file_name: &str) -> Value {
    json!({
        "_id": id,
        "originalFileName": file_name,
        "type": category,
        "downloadUrl": format!("https://files.shipgpt.io/{}/{}", ship_id, file_name),
        "createdAt": Utc::now().to_rfc3339(),
        "ship": ship_id,
    })
}
