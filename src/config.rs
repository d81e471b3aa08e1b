//! Runtime configuration for the Vacation Alert Engine service.
//!
//! Settings are read from the environment (optionally via a `.env` file),
//! with defaults suitable for local development. Invalid values fall back
//! to the default with a warning rather than aborting startup.

use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::analysis::DEFAULT_ALERT_WINDOW_DAYS;

/// Default maximum accepted upload size in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host the HTTP server binds to (`SERVER_HOST`).
    pub host: String,
    /// Port the HTTP server binds to (`SERVER_PORT`).
    pub port: u16,
    /// Alert window size used when a request does not supply one
    /// (`ALERT_WINDOW_DAYS`).
    pub default_alert_window_days: i64,
    /// Maximum accepted upload size in bytes (`MAX_UPLOAD_BYTES`).
    pub max_upload_bytes: usize,
}

impl AppConfig {
    /// Loads the configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_or("SERVER_PORT", 8000),
            default_alert_window_days: env_or("ALERT_WINDOW_DAYS", DEFAULT_ALERT_WINDOW_DAYS),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    /// Returns the socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            default_alert_window_days: DEFAULT_ALERT_WINDOW_DAYS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn env_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, %default, "Invalid value in environment, using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    // Serializes the tests that mutate process environment variables.
    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.default_alert_window_days, 60);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_bind_addr_joins_host_and_port() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 9090,
            ..AppConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_env_value_falls_back_to_default() {
        let _guard = env_guard().lock().unwrap();

        unsafe { env::set_var("SERVER_PORT", "abc") };
        let config = AppConfig::from_env();
        unsafe { env::remove_var("SERVER_PORT") };

        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_env_value_overrides_default() {
        let _guard = env_guard().lock().unwrap();

        unsafe { env::set_var("ALERT_WINDOW_DAYS", "30") };
        let config = AppConfig::from_env();
        unsafe { env::remove_var("ALERT_WINDOW_DAYS") };

        assert_eq!(config.default_alert_window_days, 30);
    }
}
