use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coinmarket_mcp::dispatch::{Dispatcher, Registry, UpstreamRequest};
use coinmarket_mcp::error::TransportFailure;
use coinmarket_mcp::tools::MarketDataTools;
use coinmarket_mcp::upstream::UpstreamClient;
use rmcp::model::{CallToolRequestParams, CallToolResult};
use rmcp::service::{RoleClient, RunningService};
use rmcp::ServiceExt;
use serde_json::{json, Value};

/// Replies `{"status":"ok"}` and remembers what it was asked for.
#[derive(Default)]
struct StubUpstream {
    calls: Mutex<Vec<UpstreamRequest>>,
}

#[async_trait]
impl UpstreamClient for StubUpstream {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<Value, TransportFailure> {
        self.calls.lock().unwrap().push(request.clone());
        Ok(json!({ "status": "ok" }))
    }
}

/// Serve the handler on one end of an in-memory pipe and connect a client to the other.
async fn connect(upstream: Arc<StubUpstream>) -> RunningService<RoleClient, ()> {
    let dispatcher = Dispatcher::new(Registry::builtin(), upstream);
    let tools = MarketDataTools::new(Arc::new(dispatcher));

    let (server_io, client_io) = tokio::io::duplex(64 * 1024);
    tokio::spawn(async move {
        let server = tools.serve(server_io).await.unwrap();
        let _ = server.waiting().await;
    });

    ().serve(client_io).await.unwrap()
}

fn call_params(value: Value) -> CallToolRequestParams {
    serde_json::from_value(value).unwrap()
}

fn text_of(result: &CallToolResult) -> String {
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(value["content"].as_array().unwrap().len(), 1);
    value["content"][0]["text"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn lists_every_operation_over_mcp() {
    let client = connect(Arc::default()).await;

    let tools = client.list_all_tools().await.unwrap();
    let names: Vec<_> = tools.iter().map(|t| t.name.to_string()).collect();
    assert_eq!(
        names,
        [
            "get-cryptocurrency-listings",
            "get-cryptocurrency-quotes",
            "get-cryptocurrency-map",
            "get-cryptocurrency-info",
            "get-global-metrics",
            "get-exchange-listings",
        ]
    );

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn call_without_arguments_uses_defaults() {
    let upstream = Arc::new(StubUpstream::default());
    let client = connect(upstream.clone()).await;

    let result = client
        .call_tool(call_params(json!({ "name": "get-global-metrics" })))
        .await
        .unwrap();
    assert_eq!(text_of(&result), "{\n  \"status\": \"ok\"\n}");
    assert_ne!(result.is_error, Some(true));

    let calls = upstream.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/global-metrics/quotes/latest");
    assert_eq!(calls[0].query, vec![("convert".to_string(), "USD".to_string())]);

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn unknown_tool_is_an_error_result() {
    let upstream = Arc::new(StubUpstream::default());
    let client = connect(upstream.clone()).await;

    let result = client
        .call_tool(call_params(json!({ "name": "get-nft-listings", "arguments": {} })))
        .await
        .unwrap();
    assert_eq!(text_of(&result), "Error: Unknown operation 'get-nft-listings'");
    assert_eq!(result.is_error, Some(true));
    assert!(upstream.calls.lock().unwrap().is_empty());

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn rule_failure_is_an_error_result() {
    let client = connect(Arc::default()).await;

    let result = client
        .call_tool(call_params(json!({ "name": "get-cryptocurrency-quotes" })))
        .await
        .unwrap();
    assert_eq!(
        text_of(&result),
        "Error: At least one of 'symbol', 'slug', or 'id' is required"
    );
    assert_eq!(result.is_error, Some(true));

    client.cancel().await.unwrap();
}
