//! Inbound Alert Receiver
//!
//! A minimal webhook endpoint built with Tokio and Axum: it accepts pushed
//! alert payloads, decodes each body as JSON, and records it to the
//! observation sink (stdout) for human inspection.
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │               ALERT RECEIVER                │
//!                      │                                            │
//!   Webhook POST       │  ┌─────────┐   ┌─────────┐   ┌─────────┐  │
//!   ───────────────────┼─▶│  http   │──▶│  alert  │──▶│  sink   │──┼──▶ stdout
//!                      │  │ server  │   │ decode  │   │ record  │  │
//!                      │  └────┬────┘   └─────────┘   └─────────┘  │
//!   200, empty body    │       │                                    │
//!   ◀──────────────────┼───────┘                                    │
//!                      │                                            │
//!                      │  ┌──────────────────────────────────────┐  │
//!                      │  │        Cross-Cutting Concerns         │  │
//!                      │  │  config · observability · lifecycle   │  │
//!                      │  └──────────────────────────────────────┘  │
//!                      └────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alert_receiver::config::loader::load_config;
use alert_receiver::{HttpServer, ObservationSink, ReceiverConfig, ReceiverError, Shutdown};

/// Minimal inbound alert receiver.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the bind address (e.g., "127.0.0.1:9099").
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alert_receiver=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("alert-receiver v0.1.0 starting");

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ReceiverConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_bytes = config.limits.max_body_bytes,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind failure is the only fatal error; there is no recovery strategy
    // for an unavailable address.
    let addr = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ReceiverError::Bind { addr, source })?;

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            alert_receiver::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, ObservationSink::stdout());
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
