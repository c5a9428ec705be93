//! Configuration types

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// How the expiry price axis is sampled
    #[serde(default)]
    pub sampling: SamplingConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Price axis sampling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Number of sample points across the range
    #[serde(default = "default_points")]
    pub points: usize,
    /// Half-width of the range around the underlying, in percent
    #[serde(default = "default_range_pct")]
    pub range_pct: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
            range_pct: default_range_pct(),
        }
    }
}

fn default_points() -> usize {
    500
}

fn default_range_pct() -> f64 {
    30.0
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
