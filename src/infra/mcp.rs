//! MCP server integration for typefully-mcp-gateway.
//!
//! - Exposes the draft operations and catalog discovery as MCP tools
//! - Mounts Streamable HTTP services (POST frames, GET SSE) at `/mcp`
//! - Supports stdio mode when `MODE=stdio`
//!
//! Every tool responds with **text content**: the invocation envelope (or the
//! discovery payload) pretty-printed as JSON, so callers on any transport see
//! the same bytes.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use rmcp::{
    handler::server::tool::{Parameters, ToolRouter},
    model::{CallToolResult, Content, JsonObject},
    ErrorData as McpError, ServerHandler,
};

use crate::core::envelope::Envelope;
use crate::tools::Dispatcher;

/// The MCP server handler. Holds the dispatcher built in `infra::boot` and
/// forwards every call through it.
#[derive(Clone)]
pub struct TypefullySvc {
    dispatcher: Arc<Dispatcher>,
}

impl TypefullySvc {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

// We don't need extra methods from ServerHandler yet, but rmcp expects the impl.
impl ServerHandler for TypefullySvc {}

fn pretty(value: &impl serde::Serialize) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

/// Render an envelope as the tool result. Failure envelopes flag `isError`
/// but still carry the well-formed JSON text; nothing else ever crosses
/// this boundary.
fn envelope_result(envelope: Envelope) -> Result<CallToolResult, McpError> {
    let text = pretty(&envelope)?;
    Ok(if envelope.success {
        CallToolResult::success(vec![Content::text(text)])
    } else {
        CallToolResult::error(vec![Content::text(text)])
    })
}

#[rmcp::tool_router]
impl TypefullySvc {
    #[rmcp::tool(
        name = "list_tools",
        description = "Returns a JSON list of all available tools with their descriptions, parameters, and examples"
    )]
    async fn list_registered_tools(&self) -> Result<CallToolResult, McpError> {
        let text = pretty(&self.dispatcher.catalog())?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[rmcp::tool(name = "create_draft", description = "Creates a new draft in Typefully")]
    async fn create_draft(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let args = JsonValue::Object(params.0);
        envelope_result(self.dispatcher.invoke("create_draft", &args).await)
    }

    #[rmcp::tool(
        name = "get_scheduled_drafts",
        description = "Retrieves recently scheduled drafts from Typefully"
    )]
    async fn get_scheduled_drafts(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let args = JsonValue::Object(params.0);
        envelope_result(self.dispatcher.invoke("get_scheduled_drafts", &args).await)
    }

    #[rmcp::tool(
        name = "get_published_drafts",
        description = "Retrieves recently published drafts from Typefully"
    )]
    async fn get_published_drafts(&self) -> Result<CallToolResult, McpError> {
        let args = JsonValue::Object(JsonObject::new());
        envelope_result(self.dispatcher.invoke("get_published_drafts", &args).await)
    }
}

pub type TypefullyRouter = ToolRouter<TypefullySvc>;

impl TypefullySvc {
    pub fn router() -> TypefullyRouter {
        // Wrapper to expose the macro-generated private tool_router
        Self::tool_router()
    }
}

/// Factory required by the rmcp Streamable HTTP & stdio transports:
/// must return a `(handler, ToolRouter<handler>)` pair.
pub fn factory_with_dispatcher(dispatcher: Arc<Dispatcher>) -> (TypefullySvc, TypefullyRouter) {
    let handler = TypefullySvc::new(dispatcher);
    let tools = TypefullySvc::tool_router();
    (handler, tools)
}
