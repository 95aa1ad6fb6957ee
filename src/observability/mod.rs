//! Observability subsystem.
//!
//! Structured logging is initialized in `main` via `tracing-subscriber`;
//! this module holds the optional metrics exporter.

pub mod metrics;
