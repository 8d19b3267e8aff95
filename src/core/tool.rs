use async_trait::async_trait;

use crate::core::catalog::ToolDescriptor;
use crate::core::error::ToolError;
use crate::core::schema::ArgSchema;

/// Metadata every dispatched tool must expose.
///
/// `arg_schema` is the runtime validator; `descriptor` is the human-facing
/// catalog entry. They describe the same shape but are deliberately
/// independent, so documentation changes cannot loosen validation.
pub trait ToolSpec {
    fn name(&self) -> &'static str;
    /// Fixed label used as the `error` field of every failure envelope this
    /// tool produces.
    fn failure_label(&self) -> &'static str;
    fn arg_schema(&self) -> ArgSchema;
    fn descriptor(&self) -> ToolDescriptor;
}

/// Tool = Spec + executable handler. `call` performs at most one upstream
/// request and receives arguments that already passed schema validation.
#[async_trait]
pub trait Tool: ToolSpec + Send + Sync {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError>;
}
