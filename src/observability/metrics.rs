//! Metrics collection and exposition.
//!
//! # Metrics
//! - `proxy_requests_total` (counter): total requests by method, status
//! - `proxy_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Exporter runs on its own bind address so the proxy port stays clean

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
///
/// Failure to install is logged, not fatal: the proxy keeps serving
/// without metrics exposition.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, start_time: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("proxy_requests_total", &labels).increment(1);
    metrics::histogram!("proxy_request_duration_seconds", &labels)
        .record(start_time.elapsed().as_secs_f64());
}
