//! Upstream market-data client.
//!
//! Provides the [`UpstreamClient`] trait and an HTTP implementation backed by
//! `reqwest`. The client is created via [`create_client`] from configuration and a
//! [`Credential`].

pub mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::dispatch::request::UpstreamRequest;
use crate::error::TransportFailure;

/// Issues a single upstream GET and returns the decoded JSON body.
///
/// Implementations make exactly one attempt. Timeouts and cancellation are applied
/// by the caller, which drops the future to abort the request.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<Value, TransportFailure>;
}

/// The API key attached to every upstream request. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Create the HTTP upstream client from config.
pub fn create_client(
    config: &crate::config::UpstreamConfig,
    credential: Credential,
) -> anyhow::Result<Box<dyn UpstreamClient>> {
    let client = http::HttpUpstream::new(config, credential)?;
    Ok(Box::new(client))
}
