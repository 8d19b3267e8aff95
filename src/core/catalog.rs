//! Machine-readable tool metadata served by the discovery operation.
//!
//! Wire field names follow the published catalog shape (`responseFormat`,
//! parameter `type`), so the serialized payload matches what callers already
//! consume.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
    pub required: bool,
}

impl ToolParameter {
    pub fn required(
        name: impl Into<String>,
        type_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: description.into(),
            required: true,
        }
    }

    pub fn optional(
        name: impl Into<String>,
        type_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: description.into(),
            required: false,
        }
    }
}

/// A worked sample invocation, for documentation only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolExample {
    pub description: String,
    pub parameters: JsonValue,
    pub response: String,
}

impl ToolExample {
    pub fn new(
        description: impl Into<String>,
        parameters: JsonValue,
        response: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            parameters,
            response: response.into(),
        }
    }
}

/// JSON-Schema-like description of a tool's success payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
    pub schema: JsonValue,
}

impl ResponseFormat {
    pub fn json(description: impl Into<String>, schema: JsonValue) -> Self {
        Self {
            type_name: "json".into(),
            description: description.into(),
            schema,
        }
    }
}

/// Static, immutable record describing one callable operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ToolParameter>,
    pub examples: Vec<ToolExample>,
    #[serde(rename = "responseFormat")]
    pub response_format: ResponseFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    /// Identity of this gateway build.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Discovery payload: the full catalog plus server identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCatalog {
    pub tools: Vec<ToolDescriptor>,
    pub count: usize,
    pub server: ServerInfo,
}
