//! Operation dispatch: routes an operation name and raw arguments through
//! validation, default merging, the business rule, request building, the upstream
//! call, and envelope formatting.
//!
//! [`Dispatcher::dispatch`] never fails. Every outcome, including an unknown
//! operation name, comes back as an [`Envelope`]. [`Dispatcher::execute`] runs the
//! same pipeline but keeps the typed [`DispatchError`].

pub mod envelope;
pub mod params;
pub mod registry;
pub mod request;

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::error::{DispatchError, TransportFailure};
use crate::upstream::UpstreamClient;

pub use envelope::{ContentBlock, Envelope};
pub use registry::Registry;
pub use request::UpstreamRequest;

/// Routes operation calls. Holds no state written during dispatch, so it is shared
/// freely across concurrent calls.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    upstream: Arc<dyn UpstreamClient>,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(registry: Registry, upstream: Arc<dyn UpstreamClient>) -> Self {
        Self {
            registry: Arc::new(registry),
            upstream,
            timeout: None,
        }
    }

    /// Bound every upstream call by `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run `name` with `args` and render the outcome. Never returns an error.
    pub async fn dispatch(
        &self,
        name: &str,
        args: Map<String, Value>,
        cancel: &CancellationToken,
    ) -> Envelope {
        let result = self.execute(name, args, cancel).await;
        envelope::render(self.registry.get(name), &result)
    }

    /// Run the pipeline for `name`, returning the upstream payload or a typed failure.
    pub async fn execute(
        &self,
        name: &str,
        args: Map<String, Value>,
        cancel: &CancellationToken,
    ) -> Result<Value, DispatchError> {
        let call_id = uuid::Uuid::now_v7();
        let span = tracing::info_span!("dispatch", operation = %name, call_id = %call_id);

        async {
            let result = self.run(name, args, cancel).await;
            match &result {
                Ok(_) => tracing::info!("operation succeeded"),
                Err(e) => tracing::warn!(kind = e.kind(), error = %e, "operation failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        name: &str,
        args: Map<String, Value>,
        cancel: &CancellationToken,
    ) -> Result<Value, DispatchError> {
        let descriptor = self
            .registry
            .get(name)
            .ok_or_else(|| DispatchError::UnknownOperation(name.to_string()))?;

        params::validate(descriptor, &args)?;
        let merged = params::merge_defaults(descriptor, args);
        params::check_rule(descriptor, &merged)?;

        let request = UpstreamRequest::build(descriptor, &merged);
        tracing::debug!(path = request.path, params = request.query.len(), "calling upstream");

        Ok(self.fetch(&request, cancel).await?)
    }

    /// One upstream attempt, raced against cancellation and the optional timeout.
    async fn fetch(
        &self,
        request: &UpstreamRequest,
        cancel: &CancellationToken,
    ) -> Result<Value, TransportFailure> {
        let call = self.upstream.fetch(request);
        let bounded = async {
            match self.timeout {
                Some(limit) => tokio::time::timeout(limit, call)
                    .await
                    .unwrap_or(Err(TransportFailure::Timeout(limit))),
                None => call.await,
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TransportFailure::Cancelled),
            result = bounded => result,
        }
    }
}
