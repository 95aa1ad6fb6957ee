//! Receiver error definitions.

use thiserror::Error;

/// Errors that can occur while receiving alerts.
///
/// Only [`ReceiverError::Bind`] is fatal. Everything else is contained to
/// the single request that produced it; the listener keeps serving.
#[derive(Debug, Error)]
pub enum ReceiverError {
    /// The configured address could not be bound at startup.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// A request body was not valid JSON.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The peer disconnected or the body read failed mid-exchange.
    #[error("connection error: {0}")]
    Connection(String),
}
