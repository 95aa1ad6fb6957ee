//! Alert payload handling subsystem.
//!
//! # Data Flow
//! ```text
//! request body (bytes)
//!     → payload.rs (decode as JSON, or mark undecodable)
//!     → sink.rs (one indivisible line per alert to the observation sink)
//! ```
//!
//! # Design Decisions
//! - No schema is assumed; any valid JSON document is an alert
//! - Decode failure produces an undecodable payload, never a fault
//! - Payloads live for one request/response exchange and are not persisted

pub mod payload;
pub mod sink;

pub use payload::AlertPayload;
pub use sink::ObservationSink;
