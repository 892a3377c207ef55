// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::sync::OnceLock;

use crate::errors::NodeError;

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize telemetry (logs + metrics)
pub fn init_telemetry() -> Result<(), NodeError> {
    // 1. Initialize Tracing (Logs)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "lamport_node=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| NodeError::Telemetry(e.to_string()))?;

    // 2. Initialize Metrics (Prometheus)
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| NodeError::Telemetry(e.to_string()))?;

    if PROM_HANDLE.set(handle).is_err() {
        tracing::warn!("Prometheus handle already set. Telemetry re-initialized?");
    }

    metrics::describe_counter!("lamport_events_recorded_total", "Events appended to the log, by kind");
    metrics::describe_gauge!("lamport_clock_value", "Logical time after the latest recording");

    metrics::gauge!("lamport_node_up", 1.0);
    Ok(())
}

/// Count one recording. No-op until `init_telemetry` installs a recorder.
pub fn record_event(kind: &'static str, logical_time: u64) {
    metrics::counter!("lamport_events_recorded_total", 1, "kind" => kind);
    metrics::gauge!("lamport_clock_value", logical_time as f64);
}

/// Get the Prometheus handle to render metrics
pub fn get_metrics() -> String {
    if let Some(handle) = PROM_HANDLE.get() {
        handle.render()
    } else {
        "# metrics not initialized".to_string()
    }
}
