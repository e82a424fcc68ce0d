use crate::config::ServerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use store::StringStore;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// String store (shared across requests)
    pub store: Arc<StringStore>,

    /// Prometheus render handle; absent when no recorder is installed
    /// (unit and integration tests).
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state without a metrics recorder
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(StringStore::new()),
            metrics: None,
        }
    }

    /// Create new server state with a Prometheus render handle
    pub fn with_metrics(config: ServerConfig, metrics: PrometheusHandle) -> Self {
        Self {
            metrics: Some(metrics),
            ..Self::new(config)
        }
    }
}
