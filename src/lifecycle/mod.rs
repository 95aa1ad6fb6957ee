//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load config → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or broadcast → stop accepting → drain → exit
//! ```
//!
//! The receiver has no graceful-shutdown obligations of its own; the
//! coordinator exists so integration tests can stop a spawned server, and
//! so Ctrl+C drains in-flight exchanges instead of cutting them off.

pub mod shutdown;

pub use shutdown::Shutdown;
