//! HTTP request/response tracing middleware.

use axum::extract::{ConnectInfo, Request};
use axum::http::header;
use std::net::SocketAddr;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

use super::request_id::RequestId;

/// Builds the per-request span.
///
/// Records method, path, remote address, user agent and the
/// [`RequestId`] set by [`super::request_id::layer`]. Missing values are
/// logged as `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let remote_addr = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_else(|| "-".to_string());

        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        let request_id = request
            .extensions()
            .get::<RequestId>()
            .map(RequestId::as_str)
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
            remote_addr = %remote_addr,
            user_agent = %user_agent,
            request_id = %request_id,
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// Every request gets an `INFO` span from [`RequestSpan`]. The response is
/// logged at `INFO` with status code and latency in milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/save remote_addr=127.0.0.1:50312 user_agent=curl/8.5.0 request_id=6f1c…}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
