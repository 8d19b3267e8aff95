use std::sync::Arc;

use axum::{routing::any_service, Router};
use http_body_util::BodyExt; // for .collect
use hyper::{header, Request, StatusCode};
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};
use tower::ServiceExt; // for .oneshot

use typefully_mcp_gateway::clients::typefully::TypefullyClient;
use typefully_mcp_gateway::infra::mcp::factory_with_dispatcher;
use typefully_mcp_gateway::infra::runtime::mcp_transport;
use typefully_mcp_gateway::tools::build_dispatcher;

static MCP_PROTOCOL_VERSION: &str = "0.5";

fn gateway_app(upstream_base: String) -> Router {
    let client = TypefullyClient::new(upstream_base, "test-key").unwrap();
    let dispatcher = Arc::new(build_dispatcher(client));
    let factory = move || factory_with_dispatcher(dispatcher.clone());
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let service = mcp_transport::make_streamable_http_service(factory, session_mgr);
    Router::new().route_service("/mcp", any_service(service))
}

async fn initialize(app: &Router) -> String {
    let init = json!({
        "jsonrpc":"2.0","id":1,"method":"initialize",
        "params":{ "protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test","version":"0.1"} }
    });
    let init_req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Protocol-Version", MCP_PROTOCOL_VERSION)
        .body(axum::body::Body::from(init.to_string()))
        .unwrap();
    let init_res = app.clone().oneshot(init_req).await.unwrap();
    assert!(init_res.status().is_success());
    let session_id = init_res
        .headers()
        .get("MCP-Session-Id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    let initialized_notif =
        json!({"jsonrpc":"2.0","method":"notifications/initialized","params":{}});
    let initialized_req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Session-Id", session_id.clone())
        .body(axum::body::Body::from(initialized_notif.to_string()))
        .unwrap();
    let initialized_res = app.clone().oneshot(initialized_req).await.unwrap();
    assert_eq!(initialized_res.status(), StatusCode::ACCEPTED);

    session_id
}

async fn rpc(app: &Router, session_id: &str, body: Value) -> Value {
    let req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Session-Id", session_id)
        .body(axum::body::Body::from(body.to_string()))
        .unwrap();
    let res = timeout(Duration::from_secs(20), app.clone().oneshot(req))
        .await
        .unwrap()
        .unwrap();
    assert!(res.status().is_success());
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let s = String::from_utf8_lossy(&bytes);
    s.lines()
        .find_map(|line| line.strip_prefix("data: ").map(|d| d.to_string()))
        .and_then(|d| serde_json::from_str::<Value>(&d).ok())
        .expect("Did not find an rpc response frame")
}

fn envelope_from(result: &Value) -> Value {
    let text = result["result"]["content"][0]["text"]
        .as_str()
        .expect("text content");
    serde_json::from_str(text).expect("content text is JSON")
}

#[tokio::test]
async fn initialize_list_and_create_draft_end_to_end() {
    let server = httpmock::MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/drafts/")
            .header("x-api-key", "Bearer test-key")
            .json_body(json!({"content": "hello"}));
        then.status(200).json_body(json!({"id": "1", "content": "hello"}));
    });

    let app = gateway_app(server.base_url());
    let session_id = initialize(&app).await;

    // tools/list advertises all four operations
    let list = rpc(
        &app,
        &session_id,
        json!({"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}}),
    )
    .await;
    let tools = list["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    for expected in [
        "list_tools",
        "create_draft",
        "get_scheduled_drafts",
        "get_published_drafts",
    ] {
        assert!(names.contains(&expected), "missing {expected} in {names:?}");
    }

    // tools/call create_draft wraps the upstream payload in a success envelope
    let call = rpc(
        &app,
        &session_id,
        json!({
            "jsonrpc":"2.0","id":3,"method":"tools/call",
            "params": {"name":"create_draft","arguments":{"content":"hello"}}
        }),
    )
    .await;
    let envelope = envelope_from(&call);
    assert_eq!(
        envelope,
        json!({"success": true, "data": {"id": "1", "content": "hello"}})
    );
    upstream.assert();
}

#[tokio::test]
async fn create_draft_without_content_is_error_frame_with_zero_upstream_calls() {
    let server = httpmock::MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(httpmock::Method::POST).path("/drafts/");
        then.status(200).json_body(json!({"id": "1"}));
    });

    let app = gateway_app(server.base_url());
    let session_id = initialize(&app).await;

    let call = rpc(
        &app,
        &session_id,
        json!({
            "jsonrpc":"2.0","id":4,"method":"tools/call",
            "params": {"name":"create_draft","arguments":{}}
        }),
    )
    .await;
    assert_eq!(call["result"]["isError"], json!(true));

    let envelope = envelope_from(&call);
    assert_eq!(envelope["success"], json!(false));
    assert_eq!(envelope["error"], "Failed to create Typefully draft");
    assert!(!envelope["details"].as_str().unwrap().is_empty());
    upstream.assert_hits(0);
}

#[tokio::test]
async fn list_tools_call_returns_the_catalog_payload() {
    let server = httpmock::MockServer::start();
    let app = gateway_app(server.base_url());
    let session_id = initialize(&app).await;

    let call = rpc(
        &app,
        &session_id,
        json!({
            "jsonrpc":"2.0","id":5,"method":"tools/call",
            "params": {"name":"list_tools","arguments":{}}
        }),
    )
    .await;
    let catalog = envelope_from(&call);
    assert_eq!(catalog["count"], 4);
    assert_eq!(catalog["server"]["name"], "typefully-mcp-gateway");
    assert!(catalog["tools"].is_array());
    // Discovery payload is not wrapped in the invocation envelope.
    assert!(catalog.get("success").is_none());
}
