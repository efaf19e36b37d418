//! Environment configuration surface
//!
//! Read once at process start into a plain struct that is passed
//! explicitly into construction. Missing variables error here rather than
//! on first use, so a misconfigured deployment fails before any record is
//! half-processed.

use thiserror::Error;

/// Record-store database path
pub const ENV_DB_PATH: &str = "DETECTIVE_DB_PATH";
/// Notification-channel destination URL
pub const ENV_ALERT_URL: &str = "DETECTIVE_ALERT_URL";
/// Completion endpoint base URL
pub const ENV_MODEL_ENDPOINT: &str = "DETECTIVE_MODEL_ENDPOINT";
/// Model identifier to invoke
pub const ENV_MODEL_ID: &str = "DETECTIVE_MODEL_ID";
/// Root directory of the blob store
pub const ENV_BLOB_ROOT: &str = "DETECTIVE_BLOB_ROOT";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

/// Pipeline configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path of the SQLite record store
    pub db_path: String,
    /// Webhook URL for high-urgency alerts
    pub alert_url: String,
    /// Base URL of the completion endpoint
    pub model_endpoint: String,
    /// Model identifier to invoke
    pub model_id: String,
    /// Root directory of the blob store
    pub blob_root: String,
}

impl PipelineConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            db_path: require(ENV_DB_PATH)?,
            alert_url: require(ENV_ALERT_URL)?,
            model_endpoint: require(ENV_MODEL_ENDPOINT)?,
            model_id: require(ENV_MODEL_ID)?,
            blob_root: require(ENV_BLOB_ROOT)?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_is_named_in_error() {
        // Process env is shared across tests, so only exercise the
        // negative path with a variable nothing else sets
        std::env::remove_var("DETECTIVE_DB_PATH_TEST_PROBE");
        let err = require("DETECTIVE_DB_PATH_TEST_PROBE").unwrap_err();
        assert!(err.to_string().contains("DETECTIVE_DB_PATH_TEST_PROBE"));
    }

    #[test]
    fn test_present_variable_is_read() {
        std::env::set_var("DETECTIVE_CONFIG_TEST_PROBE", "value");
        assert_eq!(require("DETECTIVE_CONFIG_TEST_PROBE").unwrap(), "value");
        std::env::remove_var("DETECTIVE_CONFIG_TEST_PROBE");
    }
}
