//! Metrics collection and exposition.
//!
//! # Metrics
//! - `receiver_alerts_total` (counter): requests by outcome
//!   (decoded, undecodable, connection_error, too_large)
//! - `receiver_request_duration_seconds` (histogram): handling latency
//!
//! Disabled by default; enabled via `[observability]` in the config.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on the given address.
///
/// A failed exporter is logged but never blocks the receiver itself.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "metrics exporter started");
        }
        Err(error) => {
            tracing::error!(%error, "failed to start metrics exporter");
        }
    }
}

/// Record one handled request with its outcome.
pub fn record_alert(outcome: &'static str, start_time: Instant) {
    counter!("receiver_alerts_total", "outcome" => outcome).increment(1);
    histogram!("receiver_request_duration_seconds").record(start_time.elapsed().as_secs_f64());
}
