use axum::{
    routing::{any_service, get},
    Router,
};
use std::sync::Arc;

use crate::infra::mcp;
use crate::infra::runtime::mcp_transport;
use crate::tools::Dispatcher;

/// Gateway app: `/healthz` + streamable MCP at `/mcp`.
pub fn build_app(dispatcher: Arc<Dispatcher>) -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let factory = move || mcp::factory_with_dispatcher(dispatcher.clone());
    let mcp_service = mcp_transport::make_streamable_http_service(factory, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}
