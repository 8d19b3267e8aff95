//! Catalog entry for the discovery operation itself. `list_tools` is served
//! by the dispatcher straight from the registry, so this module only carries
//! its descriptor.

use serde_json::json;

use crate::core::catalog::{ResponseFormat, ToolDescriptor, ToolExample};

pub const NAME: &str = "list_tools";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: NAME.into(),
        description:
            "Returns a JSON list of all available tools with their descriptions, parameters, and examples"
                .into(),
        parameters: vec![],
        examples: vec![ToolExample::new(
            "List all available tools",
            json!({}),
            r#"{ "tools": [ { "name": "list_tools", "description": "Returns a JSON list of all available tools..." } ], "count": 1, "server": { "name": "typefully-mcp-gateway", "version": "0.1.0" } }"#,
        )],
        response_format: ResponseFormat::json(
            "Returns information about all available tools",
            json!({
                "type": "object",
                "properties": {
                    "tools": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "description": { "type": "string" },
                                "parameters": { "type": "array" },
                                "examples": { "type": "array" },
                                "responseFormat": { "type": "object" }
                            }
                        }
                    },
                    "count": { "type": "number" },
                    "server": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "version": { "type": "string" }
                        }
                    }
                }
            }),
        ),
    }
}
