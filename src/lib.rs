//! Inbound Alert Receiver Library

pub mod alert;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use alert::{AlertPayload, ObservationSink};
pub use config::ReceiverConfig;
pub use error::ReceiverError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
