use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: booking records created.
pub const SUBMISSIONS_TOTAL: &str = "sala_submissions_total";

/// Counter: committed administrator decisions. Labels: decision.
pub const DECISIONS_TOTAL: &str = "sala_decisions_total";

/// Counter: conflicts detected. Labels: at (submit/approve).
pub const CONFLICTS_TOTAL: &str = "sala_conflicts_total";

/// Histogram: repository/notifier call latency in seconds. Labels: call.
pub const GATEWAY_DURATION_SECONDS: &str = "sala_gateway_duration_seconds";

// ── Best-effort delivery ────────────────────────────────────────

/// Counter: notifications that failed or timed out.
pub const NOTIFY_FAILURES_TOTAL: &str = "sala_notify_failures_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
