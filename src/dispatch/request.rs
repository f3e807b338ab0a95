//! Builds the upstream request from merged parameters.

use serde_json::{Map, Value};

use crate::operations::OperationDescriptor;

/// An upstream GET: endpoint path plus ordered query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub path: &'static str,
    pub query: Vec<(String, String)>,
}

impl UpstreamRequest {
    /// Build the request for `descriptor`. `null` values are left out of the query;
    /// other non-string values are rendered in their string form.
    pub fn build(descriptor: &OperationDescriptor, merged: &Map<String, Value>) -> Self {
        let query = merged
            .iter()
            .filter_map(|(key, value)| query_value(value).map(|v| (key.clone(), v)))
            .collect();
        Self {
            path: descriptor.path,
            query,
        }
    }

    /// Join `base` and the endpoint path, then append the query pairs.
    pub fn url(&self, base: &str) -> Result<reqwest::Url, String> {
        let joined = format!("{}{}", base.trim_end_matches('/'), self.path);
        let mut url =
            reqwest::Url::parse(&joined).map_err(|e| format!("invalid URL {joined}: {e}"))?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(string_form(other)),
    }
}

/// String form of a JSON value as a JavaScript `String(value)` would render it.
/// Arrays join their elements with `,`, which is how the API takes lists.
fn string_form(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
            // f64 `Display` drops a zero fraction: 1.0 -> "1".
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(string_form).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
