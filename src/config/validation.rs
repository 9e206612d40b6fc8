//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address has the shape `host:port`
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs after command-line overrides, before the config reaches the server
//! - Hostnames are accepted; DNS resolution is left to the bind call

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}': expected host:port")]
    InvalidBindAddress(String),
}

/// Validate a resolved configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_host_port(&config.listener.bind_address) {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A bind address is a non-empty host followed by a valid port.
fn is_host_port(addr: &str) -> bool {
    match addr.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ListenerConfig;

    fn config_with_address(addr: &str) -> ServiceConfig {
        ServiceConfig {
            listener: ListenerConfig {
                bind_address: addr.to_string(),
            },
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn hostname_addresses_are_accepted() {
        assert!(validate_config(&config_with_address("localhost:3000")).is_ok());
        assert!(validate_config(&config_with_address("[::1]:3000")).is_ok());
    }

    #[test]
    fn missing_port_is_rejected() {
        let errors = validate_config(&config_with_address("0.0.0.0")).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBindAddress("0.0.0.0".to_string())]
        );
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        assert!(validate_config(&config_with_address("127.0.0.1:99999")).is_err());
        assert!(validate_config(&config_with_address(":3000")).is_err());
    }
}
