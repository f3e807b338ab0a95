mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use coinmarket_mcp::{config, server};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coinmarket-mcp", version, about = "CoinMarketCap market data MCP server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP server (transport from config, stdio by default)
    Serve,
    /// List every operation with its parameters and defaults
    Tools,
    /// Run one operation and print the response text
    Call {
        /// Operation name, e.g. get-cryptocurrency-quotes
        operation: String,
        /// Argument as key=value (repeatable)
        #[arg(short = 'a', long = "arg", value_parser = cli::parse_key_val)]
        args: Vec<(String, String)>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::AppConfig::load()?;

    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve => {
            server::serve(config).await?;
        }
        Command::Tools => {
            cli::tools::print_tools();
        }
        Command::Call { operation, args } => {
            cli::call::call(&config, &operation, args).await?;
        }
    }

    Ok(())
}
