use async_trait::async_trait;
use serde_json::json;

use crate::clients::typefully::TypefullyClient;
use crate::core::catalog::{ResponseFormat, ToolDescriptor, ToolExample, ToolParameter};
use crate::core::error::ToolError;
use crate::core::schema::{ArgSchema, FieldKind};
use crate::core::tool::{Tool, ToolSpec};
use crate::domain::DraftParams;

#[derive(Clone)]
pub struct CreateDraftTool {
    client: TypefullyClient,
}

impl CreateDraftTool {
    pub fn new(client: TypefullyClient) -> Self {
        Self { client }
    }
}

impl ToolSpec for CreateDraftTool {
    fn name(&self) -> &'static str {
        "create_draft"
    }

    fn failure_label(&self) -> &'static str {
        "Failed to create Typefully draft"
    }

    fn arg_schema(&self) -> ArgSchema {
        ArgSchema::new()
            .required("content", FieldKind::String)
            .optional("threadify", FieldKind::Boolean)
            .optional("share", FieldKind::Boolean)
            .optional("schedule_date", FieldKind::String)
            .optional("auto_retweet_enabled", FieldKind::Boolean)
            .optional("auto_plug_enabled", FieldKind::Boolean)
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().into(),
            description: "Creates a new draft in Typefully".into(),
            parameters: vec![
                ToolParameter::required("content", "string", "The content of the draft"),
                ToolParameter::optional(
                    "threadify",
                    "boolean",
                    "Whether to threadify the content (default: false)",
                ),
                ToolParameter::optional(
                    "share",
                    "boolean",
                    "Whether to share the draft (default: false)",
                ),
                ToolParameter::optional(
                    "schedule_date",
                    "string",
                    "The date to schedule the draft for publication (ISO format)",
                ),
                ToolParameter::optional(
                    "auto_retweet_enabled",
                    "boolean",
                    "Whether to enable auto-retweet (default: false)",
                ),
                ToolParameter::optional(
                    "auto_plug_enabled",
                    "boolean",
                    "Whether to enable auto-plug (default: false)",
                ),
            ],
            examples: vec![
                ToolExample::new(
                    "Create a simple draft",
                    json!({"content": "This is a new Typefully draft created via the MCP tool"}),
                    r#"{ "success": true, "data": { "id": "123456", "content": "This is a new Typefully draft created via the MCP tool", ... } }"#,
                ),
                ToolExample::new(
                    "Create a threadified draft",
                    json!({
                        "content": "This is the first tweet in a thread.\n\nThis is the second tweet.",
                        "threadify": true
                    }),
                    r#"{ "success": true, "data": { "id": "123456", "content": "...", "threadified": true, ... } }"#,
                ),
                ToolExample::new(
                    "Create a scheduled draft",
                    json!({
                        "content": "This tweet will be scheduled for later publication",
                        "schedule_date": "2023-05-10T15:00:00Z"
                    }),
                    r#"{ "success": true, "data": { "id": "123456", "content": "...", "scheduled_for": "2023-05-10T15:00:00Z", ... } }"#,
                ),
            ],
            response_format: envelope_format("Returns data about the created draft with success status"),
        }
    }
}

#[async_trait]
impl Tool for CreateDraftTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: DraftParams = serde_json::from_value(arguments.clone())
            .map_err(|e| ToolError::Message(e.to_string()))?;
        Ok(self.client.create_draft(&params).await?)
    }
}

/// Response format shared by the draft operations: the invocation envelope.
pub(crate) fn envelope_format(description: &str) -> ResponseFormat {
    ResponseFormat::json(
        description,
        json!({
            "type": "object",
            "properties": {
                "success": { "type": "boolean" },
                "data": { "type": "object" },
                "error": { "type": "string" },
                "details": { "type": "string" }
            }
        }),
    )
}
