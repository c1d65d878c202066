//! Service configuration.
//!
//! All configuration is driven by environment variables.

use std::env;

use reformat_http::service::{DEFAULT_MAX_BODY_SIZE, ReformatHttpConfig};

/// Reformat service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformatConfig {
    /// Bind address.
    pub listen: String,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Maximum accepted request body, in bytes.
    pub max_body_size: usize,
}

impl Default for ReformatConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8000".to_owned(),
            log_level: "info".to_owned(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl ReformatConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Unset or unparsable values keep their defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("REFORMAT_LISTEN") {
            config.listen = v;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("MAX_BODY_SIZE") {
            match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.max_body_size = n,
                _ => tracing::warn!(value = %v, "ignoring invalid MAX_BODY_SIZE"),
            }
        }

        config
    }

    /// HTTP layer configuration derived from this config.
    #[must_use]
    pub fn http_config(&self) -> ReformatHttpConfig {
        ReformatHttpConfig {
            max_body_size: self.max_body_size,
        }
    }
}
