//! Greeting HTTP Service
//!
//! A single-route HTTP service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────┐
//!                       │           GREETING SERVICE           │
//!                       │                                      │
//!     GET /greeting?    │  ┌─────────┐       ┌──────────────┐  │
//!     name=World        │  │  http   │──────▶│   greeting   │  │
//!     ──────────────────┼─▶│ server  │       │   handler    │  │
//!                       │  └─────────┘       └──────┬───────┘  │
//!                       │                           │          │
//!     200 OK            │                           ▼          │
//!     "Hello World"     │                    ┌──────────────┐  │
//!     ◀─────────────────┼────────────────────│   response   │  │
//!                       │                    └──────────────┘  │
//!                       │                                      │
//!                       │  ┌────────────────────────────────┐  │
//!                       │  │     Cross-Cutting Concerns     │  │
//!                       │  │   ┌─────────┐   ┌──────────┐   │  │
//!                       │  │   │ config  │   │ tracing  │   │  │
//!                       │  │   └─────────┘   └──────────┘   │  │
//!                       │  └────────────────────────────────┘  │
//!                       └──────────────────────────────────────┘
//! ```
//!
//! `GET /greeting` reads an optional `name` query parameter and answers
//! `Hello <name>` as plain text. All other paths fall through to the
//! router's default 404. There is no shared mutable state: the
//! configuration is resolved once at startup and moved into the server.

// Core subsystems
pub mod config;
pub mod http;

pub use config::ServiceConfig;
pub use http::HttpServer;
