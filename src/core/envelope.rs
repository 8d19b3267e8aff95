//! Uniform success/failure wrapper returned from every invocation.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// The invocation envelope. Exactly one of the two shapes is ever produced:
///
/// - `{"success": true, "data": <opaque upstream payload>}`
/// - `{"success": false, "error": <fixed label>, "details": <diagnostic>}`
///
/// Absent fields are skipped during serialization, so the wire shape matches
/// the contract above. Build envelopes through the constructors only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Envelope {
    /// Wrap an upstream payload, unmodified, as a success.
    pub fn success(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    /// Wrap a failure under the operation's fixed label. `details` carries
    /// the underlying diagnostic and is never dropped.
    pub fn failure(label: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(label.into()),
            details: Some(details.into()),
        }
    }
}
