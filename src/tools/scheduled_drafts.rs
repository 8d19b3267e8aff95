use async_trait::async_trait;
use serde_json::json;

use crate::clients::typefully::TypefullyClient;
use crate::core::catalog::{ToolDescriptor, ToolExample, ToolParameter};
use crate::core::error::ToolError;
use crate::core::schema::{ArgSchema, FieldKind};
use crate::core::tool::{Tool, ToolSpec};
use crate::domain::ScheduledDraftsQuery;
use crate::tools::create_draft::envelope_format;

#[derive(Clone)]
pub struct ScheduledDraftsTool {
    client: TypefullyClient,
}

impl ScheduledDraftsTool {
    pub fn new(client: TypefullyClient) -> Self {
        Self { client }
    }
}

impl ToolSpec for ScheduledDraftsTool {
    fn name(&self) -> &'static str {
        "get_scheduled_drafts"
    }

    fn failure_label(&self) -> &'static str {
        "Failed to get scheduled Typefully drafts"
    }

    fn arg_schema(&self) -> ArgSchema {
        ArgSchema::new().optional("content_filter", FieldKind::String)
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().into(),
            description: "Retrieves recently scheduled drafts from Typefully".into(),
            parameters: vec![ToolParameter::optional(
                "content_filter",
                "string",
                "Filter drafts by content",
            )],
            examples: vec![
                ToolExample::new(
                    "Get all scheduled drafts",
                    json!({}),
                    r#"{ "success": true, "data": { "drafts": [...], "meta": {...} } }"#,
                ),
                ToolExample::new(
                    "Get scheduled drafts containing specific content",
                    json!({"content_filter": "announcement"}),
                    r#"{ "success": true, "data": { "drafts": [...], "meta": {...} } }"#,
                ),
            ],
            response_format: envelope_format(
                "Returns data about scheduled drafts with success status",
            ),
        }
    }
}

#[async_trait]
impl Tool for ScheduledDraftsTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let query = if arguments.is_null() {
            ScheduledDraftsQuery::default()
        } else {
            serde_json::from_value(arguments.clone())
                .map_err(|e| ToolError::Message(e.to_string()))?
        };
        Ok(self.client.scheduled_drafts(&query).await?)
    }
}
