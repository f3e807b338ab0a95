//! CoinMarketCap market data over MCP.
//!
//! A pass-through proxy: each MCP tool is a named, read-only CoinMarketCap query.
//! No caching, no retries, no rate limiting. The only state is the API key and
//! base URL, both fixed at startup.
//!
//! | Tool | Upstream path | Requires | Defaults |
//! |------|---------------|----------|----------|
//! | `get-cryptocurrency-listings` | `/cryptocurrency/listings/latest` | | start=1, limit=100, convert=USD |
//! | `get-cryptocurrency-quotes` | `/cryptocurrency/quotes/latest` | symbol, slug, or id | convert=USD |
//! | `get-cryptocurrency-map` | `/cryptocurrency/map` | | listing_status=active, start=1, limit=100 |
//! | `get-cryptocurrency-info` | `/cryptocurrency/info` | symbol, slug, or id | |
//! | `get-global-metrics` | `/global-metrics/quotes/latest` | | convert=USD |
//! | `get-exchange-listings` | `/exchange/listings/latest` | | start=1, limit=100, convert=USD |
//!
//! # Modules
//!
//! - [`config`]: configuration loading from TOML files and environment variables
//! - [`operations`]: the operation descriptors
//! - [`dispatch`]: validation, default merging, request building, and envelopes
//! - [`upstream`]: the HTTP client that talks to CoinMarketCap
//! - [`tools`]: the MCP `ServerHandler`
//! - [`server`]: stdio and streamable HTTP transports

pub mod config;
pub mod dispatch;
pub mod error;
pub mod operations;
pub mod server;
pub mod tools;
pub mod upstream;
