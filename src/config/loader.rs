//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{PayoffError, Result};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with PAYOFF_, `__` between sections)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    // e.g. PAYOFF_SAMPLING__POINTS=1000
    builder = builder.add_source(
        Environment::with_prefix("PAYOFF")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| PayoffError::Configuration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| PayoffError::Configuration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config(Some("definitely/not/here.toml")).unwrap();
        assert_eq!(config.sampling.points, 500);
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let path = std::env::temp_dir().join("payoff_builder_loader_test.toml");
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "[sampling]\npoints = 250\nrange_pct = 12.5").unwrap();
        }

        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.sampling.points, 250);
        assert_eq!(config.sampling.range_pct, 12.5);

        std::fs::remove_file(&path).ok();
    }
}
