//! Metrics collection and exposition.
//!
//! # Metrics
//! - `nav_queries_total` (counter): navigation queries by kind
//! - `nav_unknown_paths_total` (counter): lookups that matched no route
//! - `nav_registry_reloads_total` (counter): reloads by outcome
//! - `nav_request_duration_seconds` (histogram): API latency by endpoint

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter. Must be called inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_query(kind: &'static str) {
    counter!("nav_queries_total", "query" => kind).increment(1);
}

pub fn record_unknown_path() {
    counter!("nav_unknown_paths_total").increment(1);
}

pub fn record_reload(outcome: &'static str) {
    counter!("nav_registry_reloads_total", "outcome" => outcome).increment(1);
}

pub fn record_request(endpoint: String, status: u16, start: Instant) {
    histogram!(
        "nav_request_duration_seconds",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
