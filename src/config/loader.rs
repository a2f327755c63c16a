//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::KernelConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::controller::ControllerReference;
use crate::error::KernelError;
use crate::routing::{Route, RouteTable};

/// Error type for configuration loading. Fatal to application startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parsed config failed semantic validation.
    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),

    /// A route declaration failed to compile into a route.
    #[error("route `{name}`: {source}")]
    Route {
        /// The offending route.
        name: String,
        /// The compilation or registration failure.
        source: KernelError,
    },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build a route table from a parsed, validated configuration.
pub fn build_table(config: &KernelConfig) -> Result<RouteTable, ConfigError> {
    validate_config(config).map_err(ConfigError::Validation)?;

    let mut table = RouteTable::new();
    for declared in &config.routes {
        let route = Route::with_options(
            &declared.name,
            &declared.pattern,
            ControllerReference::qualified(&declared.controller),
            declared.constraints.clone(),
            declared.defaults.clone(),
        )
        .map_err(|source| ConfigError::Route {
            name: declared.name.clone(),
            source,
        })?;
        table.add(route).map_err(|source| ConfigError::Route {
            name: declared.name.clone(),
            source,
        })?;
    }

    tracing::info!(routes = table.len(), "Route table built from configuration");
    Ok(table)
}

/// Load, validate and compile a route table from a TOML file.
pub fn load_routes(path: &Path) -> Result<RouteTable, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: KernelConfig = toml::from_str(&content)?;
    build_table(&config)
}
