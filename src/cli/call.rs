//! CLI `call` command: dispatch one operation from the terminal.

use anyhow::{bail, Result};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

use coinmarket_mcp::config::AppConfig;
use coinmarket_mcp::server::build_dispatcher;

/// Run `operation` once and print the response text to stdout.
///
/// Ctrl-C cancels the in-flight upstream request.
pub async fn call(config: &AppConfig, operation: &str, args: Vec<(String, String)>) -> Result<()> {
    let dispatcher = build_dispatcher(config)?;

    let args: Map<String, Value> = args
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let envelope = dispatcher.dispatch(operation, args, &cancel).await;
    println!("{}", envelope.as_text());

    if envelope.is_error {
        bail!("{operation} failed");
    }
    Ok(())
}
