//! Prometheus metrics for the API server.

use std::sync::LazyLock;
use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use regex_lite::Regex;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "clipcut_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "clipcut_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "clipcut_http_requests_in_flight";

    // Suggestion metrics
    pub const VIDEOS_PROCESSED_TOTAL: &str = "clipcut_videos_processed_total";
    pub const SUGGESTIONS_GENERATED_TOTAL: &str = "clipcut_suggestions_generated_total";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "clipcut_rate_limit_hits_total";
}

static NUMERIC_SEGMENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"/[0-9]+(/|$)").ok());

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a processed video and the number of suggestions produced for it.
pub fn record_suggestions(strategy: &str, count: usize) {
    let labels = [("strategy", strategy.to_string())];
    counter!(names::VIDEOS_PROCESSED_TOTAL, &labels).increment(1);
    counter!(names::SUGGESTIONS_GENERATED_TOTAL, &labels).increment(count as u64);
}

/// Record rate limit hit.
pub fn record_rate_limit_hit(endpoint: &str) {
    let labels = [("endpoint", sanitize_path(endpoint))];
    counter!(names::RATE_LIMIT_HITS_TOTAL, &labels).increment(1);
}

/// Sanitize path for metrics labels.
fn sanitize_path(path: &str) -> String {
    match NUMERIC_SEGMENT.as_ref() {
        Some(re) => re.replace_all(path, "/:id$1").into_owned(),
        None => path.to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("/api/process-video"), "/api/process-video");
        assert_eq!(sanitize_path("/api/items/42"), "/api/items/:id");
        assert_eq!(sanitize_path("/api/items/42/parts"), "/api/items/:id/parts");
    }
}
