//! Shared application state for the pixapi gateway.
//!
//! Owns the metrics registry so tests can build a fresh instance per case;
//! the running process holds exactly one, shared by both listeners.

use std::sync::Arc;

use pixapi_core::metrics::{Counter, MetricsRegistry};

use crate::config::GatewayConfig;

const REQUEST_COUNT: &str = "request_count";
const REQUEST_COUNT_HELP: &str = "Número total de requisições";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    metrics: MetricsRegistry,
    request_count: Arc<Counter>,
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Self {
        let metrics = MetricsRegistry::new();
        let request_count = metrics.register_counter(REQUEST_COUNT, REQUEST_COUNT_HELP);

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics,
                request_count,
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.inner.metrics
    }

    /// The per-request counter, cached so the hook skips the registry lookup.
    pub fn request_count(&self) -> &Counter {
        &self.inner.request_count
    }
}
