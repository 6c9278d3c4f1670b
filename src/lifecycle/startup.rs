//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Compile the route table
//! - Build the shared application state
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Listeners start last (traffic only when ready)

use std::path::Path;

use thiserror::Error;

use crate::config::validation::validate_config;
use crate::config::{load_config, AppConfig, ConfigError};
use crate::http::{AppState, Snapshot};
use crate::routing::RegistryError;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("route table: {0}")]
    Registry(#[from] RegistryError),
}

/// Read the configuration at `path`, or the built-in defaults when absent.
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig, StartupError> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => {
            let config = AppConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

/// Compile the route table and build the application state.
pub fn bootstrap(config: AppConfig) -> Result<AppState, StartupError> {
    let snapshot = Snapshot::new(config)?;

    tracing::info!(
        bind_address = %snapshot.config.listener.bind_address,
        routes = snapshot.registry.len(),
        sidebar_items = snapshot.registry.sidebar_routes().len(),
        request_timeout_secs = snapshot.config.timeouts.request_secs,
        "Navigation state ready"
    );

    Ok(AppState::new(snapshot))
}
