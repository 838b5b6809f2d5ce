//! Shared helpers for the application modules.

use serde_json::{json, Value};

/// Confirmation payload returned by mutating endpoints
/// (`{"status": "deleted"}` and friends).
pub fn status_payload(status: &str) -> Value {
    json!({ "status": status })
}
