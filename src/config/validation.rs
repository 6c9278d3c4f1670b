//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//! - Compile the route table once to surface every route issue
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::{RouteIssue, RouteRegistry};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("navigation.{field} must be an absolute path, got '{value}'")]
    NavigationPath { field: &'static str, value: String },

    #[error("routes: {0}")]
    Route(RouteIssue),
}

/// Validate a configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    for (field, value) in [
        ("settings_path", &config.navigation.settings_path),
        ("login_path", &config.navigation.login_path),
    ] {
        if !value.starts_with('/') {
            errors.push(ValidationError::NavigationPath {
                field,
                value: value.clone(),
            });
        }
    }

    if let Err(e) = RouteRegistry::new(config.routes.clone()) {
        errors.extend(e.issues().iter().cloned().map(ValidationError::Route));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
