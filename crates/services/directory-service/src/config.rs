//! Directory service configuration.

use std::env;

use common::ServiceConfig;

/// Default service name used in logs
pub const DEFAULT_SERVICE_NAME: &str = "directory-service";

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Directory service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
    /// Capacity hint for the in-memory store
    pub initial_capacity: usize,
}

impl DirectoryConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first when present. Missing or unparsable
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            service_name: lookup("DIRECTORY_SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: lookup("DIRECTORY_LOG_LEVEL")
                .or_else(|| lookup("LOG_LEVEL"))
                .unwrap_or(defaults.log_level),
            initial_capacity: lookup("DIRECTORY_INITIAL_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.initial_capacity),
        }
    }

    /// Shared service settings view
    pub fn service(&self) -> ServiceConfig {
        ServiceConfig {
            service_name: self.service_name.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            initial_capacity: 0,
        }
    }
}
