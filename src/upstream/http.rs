//! `reqwest` implementation of [`UpstreamClient`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use serde_json::Value;

use super::{Credential, UpstreamClient};
use crate::config::UpstreamConfig;
use crate::dispatch::request::UpstreamRequest;
use crate::error::TransportFailure;

/// HTTPS client with the credential and `Accept: application/json` preset on every request.
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUpstream {
    pub fn new(config: &UpstreamConfig, credential: Credential) -> Result<Self> {
        reqwest::Url::parse(&config.base_url)
            .with_context(|| format!("invalid upstream base_url: {}", config.base_url))?;

        let header = HeaderName::from_bytes(config.api_key_header.as_bytes())
            .with_context(|| format!("invalid api_key_header: {}", config.api_key_header))?;
        let mut key = HeaderValue::from_str(credential.expose())
            .context("API key contains characters not allowed in a header")?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("coinmarket-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        tracing::debug!(base_url = %config.base_url, "upstream client ready");

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<Value, TransportFailure> {
        let url = request.url(&self.base_url).map_err(TransportFailure::Network)?;
        tracing::debug!(path = request.path, "upstream GET");

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(error = %e, path = request.path, "upstream request failed");
            TransportFailure::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                path = request.path,
                "upstream returned error status"
            );
            return Err(TransportFailure::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, path = request.path, "failed to read upstream body");
            TransportFailure::Network(e.to_string())
        })?;

        let payload: Value = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, path = request.path, "upstream body is not valid JSON");
            TransportFailure::Decode(e.to_string())
        })?;

        if is_empty_payload(&payload) {
            tracing::warn!(path = request.path, body = %payload, "upstream returned no data");
            return Err(TransportFailure::Decode(format!("empty payload: {payload}")));
        }
        Ok(payload)
    }
}

/// `null`, `false`, `0` and `""` carry no data.
fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        let config = UpstreamConfig {
            base_url: "::not-a-url".into(),
            ..UpstreamConfig::default()
        };
        assert!(HttpUpstream::new(&config, Credential::new("k")).is_err());
    }

    #[test]
    fn rejects_key_with_newline() {
        let config = UpstreamConfig::default();
        assert!(HttpUpstream::new(&config, Credential::new("bad\nkey")).is_err());
    }

    #[test]
    fn falsy_payloads_are_empty() {
        for body in ["null", "false", "0", "0.0", "\"\""] {
            let value: Value = serde_json::from_str(body).unwrap();
            assert!(is_empty_payload(&value), "{body}");
        }
        for body in ["{}", "[]", "true", "1", "\"ok\""] {
            let value: Value = serde_json::from_str(body).unwrap();
            assert!(!is_empty_payload(&value), "{body}");
        }
    }

    #[test]
    fn builds_with_defaults() {
        let config = UpstreamConfig::default();
        assert!(HttpUpstream::new(&config, Credential::new("abc123")).is_ok());
    }
}
