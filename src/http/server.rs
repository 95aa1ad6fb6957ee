//! HTTP server setup and the alert handler.
//!
//! # Responsibilities
//! - Create the Axum Router with the alert handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind the server to a listener and serve until shutdown
//! - Read each body in full, decode it, record it, acknowledge it
//!
//! The external contract is deliberately small: every POST to any path is
//! acknowledged with 200 and an empty body, decoded or not. Any other
//! method on those paths gets 405 from the method router. Payload-level
//! rejection is never signalled back to the sender.

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::alert::{AlertPayload, ObservationSink};
use crate::config::{LimitsConfig, ReceiverConfig};
use crate::error::ReceiverError;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub sink: ObservationSink,
    pub limits: LimitsConfig,
}

/// HTTP server for the alert receiver.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and
    /// observation sink.
    pub fn new(config: ReceiverConfig, sink: ObservationSink) -> Self {
        let state = AppState {
            sink,
            limits: config.limits.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ReceiverConfig, state: AppState) -> Router {
        Router::new()
            .route("/", post(alert_handler))
            .route("/{*path}", post(alert_handler))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns only when the shutdown channel fires or the process
    /// receives Ctrl+C; under normal operation the receiver runs until
    /// externally terminated.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "waiting for webhook alerts"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("listener stopped");
        Ok(())
    }
}

/// Main alert handler.
/// Reads the body, decodes it as JSON, records it, and acknowledges.
async fn alert_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // Read the body in full before decoding; payloads are expected to be
    // small. An oversize declared length is already rejected with 413 by
    // the body-limit layer; a body that announces no length (chunked
    // transfer) crosses the limit mid-read instead, so the read error is
    // classified before it is reported.
    let body = request.into_body();
    let bytes = match axum::body::to_bytes(body, state.limits.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) if is_length_limit(&e) => {
            tracing::warn!(
                request_id = %request_id,
                limit = state.limits.max_body_bytes,
                "payload too large"
            );
            metrics::record_alert("too_large", start_time);
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
        Err(e) => {
            let error = ReceiverError::Connection(e.to_string());
            tracing::warn!(
                request_id = %request_id,
                %error,
                "abandoning exchange, body read failed"
            );
            metrics::record_alert("connection_error", start_time);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let payload = AlertPayload::decode(&bytes);
    match &payload {
        AlertPayload::Decoded(_) => {
            tracing::info!(
                request_id = %request_id,
                bytes = bytes.len(),
                "alert received"
            );
            metrics::record_alert("decoded", start_time);
        }
        AlertPayload::Undecodable { error } => {
            tracing::warn!(
                request_id = %request_id,
                %error,
                "alert body did not decode"
            );
            metrics::record_alert("undecodable", start_time);
        }
    }
    state.sink.record(&payload);

    // Fixed acknowledgment regardless of decode outcome, so the sender
    // does not retry.
    StatusCode::OK.into_response()
}

/// Whether a body read failed because it crossed the size limit rather
/// than because the peer went away.
fn is_length_limit(error: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(err) = source {
        if err.downcast_ref::<http_body_util::LengthLimitError>().is_some() {
            return true;
        }
        source = err.source();
    }
    false
}

/// Wait for shutdown: Ctrl+C or the test-facing shutdown channel.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
        _ = shutdown.recv() => {
            tracing::info!("shutdown triggered");
        }
    }
}
