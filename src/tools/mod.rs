//! MCP tool handler. Advertises one tool per registered operation and routes
//! `tools/call` into the [`Dispatcher`].

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ErrorData as McpError, Implementation,
    ListToolsResult, PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};

use crate::dispatch::{Dispatcher, Envelope};
use crate::operations::OperationDescriptor;

/// The CoinMarketCap MCP tool handler. Cheap to clone; all clones share one dispatcher.
#[derive(Clone)]
pub struct MarketDataTools {
    dispatcher: Arc<Dispatcher>,
}

impl MarketDataTools {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Tool definitions in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher.registry().iter().map(tool_for).collect()
    }
}

fn tool_for(descriptor: &OperationDescriptor) -> Tool {
    let schema = descriptor.input_schema();
    let input_schema = schema.as_object().cloned().unwrap_or_default();
    Tool::new(descriptor.name, descriptor.description, Arc::new(input_schema))
}

/// Map an envelope onto the MCP result, flagging failures with `isError`.
pub fn into_call_result(envelope: Envelope) -> CallToolResult {
    let is_error = envelope.is_error;
    let content = vec![Content::text(envelope.into_text())];
    if is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

impl ServerHandler for MarketDataTools {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request.arguments.unwrap_or_default();
        tracing::info!(tool = %request.name, args = args.len(), "call_tool");

        let envelope = self
            .dispatcher
            .dispatch(&request.name, args, &context.ct)
            .await;
        Ok(into_call_result(envelope))
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "coinmarketcap".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "CoinMarketCap market data. Use get-cryptocurrency-map to find IDs, \
                 get-cryptocurrency-quotes or get-cryptocurrency-info with symbol, slug, or id, \
                 and the listings tools for ranked market data."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
