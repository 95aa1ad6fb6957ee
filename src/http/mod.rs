//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, POST routing)
//!     → request.rs (tag request with an ID for tracing)
//!     → alert handler (read body, decode, record, acknowledge)
//!     → 200 empty body to client
//! ```

pub mod request;
pub mod server;

pub use server::HttpServer;
