//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.service_name, "service");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_service_config_deserialize() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"service_name":"directory","log_level":"debug"}"#).unwrap();
        assert_eq!(config.service_name, "directory");
        assert_eq!(config.log_level, "debug");
    }
}
