//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → command-line overrides applied
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → moved into the server at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; no global state
//! - All fields have defaults so an empty config file is valid
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ServiceConfig};
pub use validation::{validate_config, ValidationError};
