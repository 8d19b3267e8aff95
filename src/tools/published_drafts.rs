use async_trait::async_trait;
use serde_json::json;

use crate::clients::typefully::TypefullyClient;
use crate::core::catalog::{ToolDescriptor, ToolExample};
use crate::core::error::ToolError;
use crate::core::schema::ArgSchema;
use crate::core::tool::{Tool, ToolSpec};
use crate::tools::create_draft::envelope_format;

#[derive(Clone)]
pub struct PublishedDraftsTool {
    client: TypefullyClient,
}

impl PublishedDraftsTool {
    pub fn new(client: TypefullyClient) -> Self {
        Self { client }
    }
}

impl ToolSpec for PublishedDraftsTool {
    fn name(&self) -> &'static str {
        "get_published_drafts"
    }

    fn failure_label(&self) -> &'static str {
        "Failed to get published Typefully drafts"
    }

    fn arg_schema(&self) -> ArgSchema {
        ArgSchema::new()
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().into(),
            description: "Retrieves recently published drafts from Typefully".into(),
            parameters: vec![],
            examples: vec![ToolExample::new(
                "Get all published drafts",
                json!({}),
                r#"{ "success": true, "data": { "drafts": [...], "meta": {...} } }"#,
            )],
            response_format: envelope_format(
                "Returns data about published drafts with success status",
            ),
        }
    }
}

#[async_trait]
impl Tool for PublishedDraftsTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let _ = arguments;
        Ok(self.client.published_drafts().await?)
    }
}
