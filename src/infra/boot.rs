use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::clients::typefully::TypefullyClient;
use crate::infra::config::Config;
use crate::infra::{http_app, mcp};
use crate::infra::runtime::mcp_transport;
use crate::tools::build_dispatcher;

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::load();
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        "BOOT typefully-mcp-gateway"
    );

    // Missing API key aborts here, before any transport starts serving.
    let client = TypefullyClient::from_config(&cfg.upstream)?;
    let dispatcher = Arc::new(build_dispatcher(client));

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == "stdio" {
        let factory = {
            let dispatcher = dispatcher.clone();
            move || mcp::factory_with_dispatcher(dispatcher)
        };
        tokio::select! {
            res = mcp_transport::serve_stdio(factory) => res.map_err(|e| anyhow::anyhow!(e))?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down typefully-mcp-gateway");
            }
        }
        return Ok(());
    }

    // HTTP server
    let app = http_app::build_app(dispatcher);
    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::select! {
        res = axum::serve(listener, app).into_future() => res?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down typefully-mcp-gateway");
        }
    }
    Ok(())
}
