//! JSON validity checks
//!
//! One pure parse function reused by every path that validates content
//! (create, read, update, and the JSON family listing).

use serde_json::Value;

/// Parse `content` as JSON, returning the parsed value.
pub fn parse(content: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(content)
}

/// Whether `content` is well-formed JSON.
pub fn is_valid(content: &str) -> bool {
    parse(content).is_ok()
}
