//! Process configuration read from the environment.

use crate::{cart::Catalog, error::ConfigError};
use std::{net::SocketAddr, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Catalog JSON file; the built-in demo catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Loads the configured catalog, or the demo catalog when none is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog file cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::demo()),
        }
    }
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let bind_raw = or_default("CHECKPAY_BIND_ADDR", "0.0.0.0:8000");
    let bind_addr = bind_raw
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "CHECKPAY_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let log_level = or_default("CHECKPAY_LOG_LEVEL", "info");
    if log_level.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "CHECKPAY_LOG_LEVEL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let catalog_path = lookup("CHECKPAY_CATALOG_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        bind_addr,
        log_level,
        catalog_path,
    })
}
