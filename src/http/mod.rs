//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route registration)
//!     → greeting.rs (query extraction, response body)
//!     → Send to client
//! ```

pub mod greeting;
pub mod server;

pub use server::HttpServer;
