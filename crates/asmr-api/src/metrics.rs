//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "asmr_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "asmr_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "asmr_http_requests_in_flight";

    // Analysis metrics
    pub const ANALYSES_TOTAL: &str = "asmr_analyses_total";
    pub const ANALYSIS_DURATION_SECONDS: &str = "asmr_analysis_duration_seconds";
    pub const TRIGGERS_FOUND: &str = "asmr_triggers_found";
    pub const ANALYSES_REJECTED_BUSY: &str = "asmr_analyses_rejected_busy_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", route_label(path).to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a finished analysis.
pub fn record_analysis(strategy: &str, success: bool, duration_secs: f64) {
    let labels = [
        ("strategy", strategy.to_string()),
        ("outcome", if success { "success" } else { "failure" }.to_string()),
    ];
    counter!(names::ANALYSES_TOTAL, &labels).increment(1);
    histogram!(names::ANALYSIS_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record how many triggers an analysis produced.
pub fn record_triggers_found(count: usize) {
    histogram!(names::TRIGGERS_FOUND).record(count as f64);
}

/// Record a submission turned away because another analysis was running.
pub fn record_busy_rejection() {
    counter!(names::ANALYSES_REJECTED_BUSY).increment(1);
}

/// Collapse unknown paths so scanners can't blow up label cardinality.
fn route_label(path: &str) -> &str {
    match path {
        "/" | "/api/analyze" | "/health" | "/healthz" | "/metrics" => path,
        _ => "other",
    }
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
