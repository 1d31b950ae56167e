//! JSON rendering of descriptor bundles.

use serde::Serialize;

/// Render any serializable descriptor as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
