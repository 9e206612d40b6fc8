//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the greeting route
//! - Bind the router to an already-open listener
//! - Serve connections until the process is terminated
//!
//! Unmatched paths fall through to the router's default fallback (404);
//! no catch-all handler is registered.

use axum::{routing::get, Router};
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::greeting;

/// HTTP server for the greeting service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router();
        Self { router, config }
    }

    /// Build the Axum router with all routes.
    fn build_router() -> Router {
        Router::new().route("/greeting", get(greeting::greeting))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves indefinitely; returns only if the listener fails.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListenerConfig;

    #[test]
    fn server_carries_the_resolved_config() {
        let config = ServiceConfig {
            listener: ListenerConfig {
                bind_address: "127.0.0.1:9090".to_string(),
            },
        };
        let server = HttpServer::new(config);
        assert_eq!(server.config().listener.bind_address, "127.0.0.1:9090");
    }
}
