//! Monitor configuration management.
//!
//! A [`MonitorConfig`] pins down the two numbers the verdict depends on (the
//! window length and the ratio threshold) plus ingestion behavior, with
//! serialization support so a surveillance setup can be version-controlled
//! and reproduced.
//!
//! # Example
//!
//! ```ignore
//! use cancellation_monitor::MonitorConfig;
//!
//! let config = MonitorConfig::default().with_log_rejects(false);
//! config.save_toml("surveillance.toml")?;
//!
//! let loaded = MonitorConfig::load_toml("surveillance.toml")?;
//! ```

use std::fs;
use std::path::Path;

use crate::error::{MonitorError, Result};
use crate::scanner::{DEFAULT_MAX_CANCEL_RATIO, DEFAULT_WINDOW_MS};

/// Configuration for a cancellation monitor.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MonitorConfig {
    /// Window length in milliseconds (boundary inclusive)
    pub window_ms: i64,

    /// Cancellation-ratio threshold, exceeded strictly
    pub max_cancel_ratio: f64,

    /// Log rejected input lines at WARN level
    pub log_rejects: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_WINDOW_MS,               // 60 seconds
            max_cancel_ratio: DEFAULT_MAX_CANCEL_RATIO, // 1/3
            log_rejects: true,
        }
    }
}

impl MonitorConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window length in milliseconds.
    pub fn with_window_ms(mut self, window_ms: i64) -> Self {
        self.window_ms = window_ms;
        self
    }

    /// Set the ratio threshold.
    pub fn with_max_cancel_ratio(mut self, ratio: f64) -> Self {
        self.max_cancel_ratio = ratio;
        self
    }

    /// Enable/disable WARN logs for rejected lines.
    pub fn with_log_rejects(mut self, log: bool) -> Self {
        self.log_rejects = log;
        self
    }

    /// Validate the configuration.
    ///
    /// Returns Ok(()) if valid, Err(msg) otherwise.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.window_ms <= 0 {
            return Err(format!("window_ms must be > 0, got {}", self.window_ms));
        }
        if !self.max_cancel_ratio.is_finite() || self.max_cancel_ratio < 0.0 {
            return Err(format!(
                "max_cancel_ratio must be a finite non-negative number, got {}",
                self.max_cancel_ratio
            ));
        }
        Ok(())
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).map_err(|e| MonitorError::ConfigFormat(e.to_string()))?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Load configuration from a TOML file, validating it.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: MonitorConfig =
            toml::from_str(&contents).map_err(|e| MonitorError::ConfigFormat(e.to_string()))?;
        config.validate().map_err(MonitorError::Config)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| MonitorError::ConfigFormat(e.to_string()))?;
        fs::write(path, json_string)?;
        Ok(())
    }

    /// Load configuration from a JSON file, validating it.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: MonitorConfig = serde_json::from_str(&contents)
            .map_err(|e| MonitorError::ConfigFormat(e.to_string()))?;
        config.validate().map_err(MonitorError::Config)?;
        Ok(config)
    }
}
