#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Router;
use coinmarket_mcp::config::UpstreamConfig;
use coinmarket_mcp::dispatch::{Dispatcher, Registry};
use coinmarket_mcp::upstream::http::HttpUpstream;
use coinmarket_mcp::upstream::Credential;

pub const TEST_KEY: &str = "test-api-key";

/// One request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct Captured {
    pub path: String,
    pub query: HashMap<String, String>,
    pub api_key: Option<String>,
    pub accept: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// In-process stand-in for the CoinMarketCap API, serving every path with one canned reply.
pub struct MockUpstream {
    pub base_url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl MockUpstream {
    pub async fn start(status: u16, body: &str) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: u16, body: &str, delay: Duration) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            delay,
            captured: captured.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/v1"),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }

    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig {
            base_url: self.base_url.clone(),
            ..UpstreamConfig::default()
        }
    }

    pub fn client(&self) -> HttpUpstream {
        HttpUpstream::new(&self.upstream_config(), Credential::new(TEST_KEY)).unwrap()
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(Registry::builtin(), Arc::new(self.client()))
    }
}

async fn respond(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.captured.lock().unwrap().push(Captured {
        path: uri.path().to_string(),
        query: decode_query(uri.query().unwrap_or("")),
        api_key: header("x-cmc_pro_api_key"),
        accept: header("accept"),
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, state.body.clone())
}

fn decode_query(query: &str) -> HashMap<String, String> {
    let url = reqwest::Url::parse(&format!("http://mock/?{query}")).unwrap();
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn expected(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
