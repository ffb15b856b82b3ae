//! Application settings.
//!
//! Defaults reproduce the standard 20 px/unit plot over [-10, 10]. A JSON file
//! named by `GRAPH_ANALYZER_CONFIG` may override any subset of fields.

use crate::plot::SampleGrid;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional settings file.
pub const CONFIG_ENV: &str = "GRAPH_ANALYZER_CONFIG";

/// Largest accepted `plot.grid_extent`.
pub const MAX_GRID_EXTENT: u32 = 1_000;
/// Largest accepted `sample_extent * steps_per_unit`, i.e. samples per side.
pub const MAX_SAMPLE_STEPS: u32 = 100_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Window geometry and title.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Graph Analyzer".to_string(),
            inner_size: [900.0, 700.0],
            min_inner_size: [800.0, 600.0],
        }
    }
}

/// Plot scale, grid and sampling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub pixels_per_unit: f32,
    /// Grid lines at every integer in `-grid_extent..=grid_extent`.
    pub grid_extent: u32,
    /// Tick labels at every `tick_step`-th grid line.
    pub tick_step: u32,
    /// Sampling covers `-sample_extent..=sample_extent`.
    pub sample_extent: u32,
    pub steps_per_unit: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: 20.0,
            grid_extent: 10,
            tick_step: 2,
            sample_extent: 10,
            steps_per_unit: 10,
        }
    }
}

impl PlotConfig {
    pub fn sample_grid(&self) -> SampleGrid {
        SampleGrid::symmetric(self.sample_extent, self.steps_per_unit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub plot: PlotConfig,
}

impl AppConfig {
    /// Load from `GRAPH_ANALYZER_CONFIG` if set. Never fails: any problem is
    /// logged and the defaults are used.
    pub fn load() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return Self::default();
        };

        match Self::load_from(Path::new(&path)) {
            Ok(config) => {
                tracing::info!(path = %path, "loaded configuration");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "using default configuration");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let plot = &self.plot;
        if !(plot.pixels_per_unit.is_finite() && plot.pixels_per_unit > 0.0) {
            return Err(ConfigError::Invalid(
                "plot.pixels_per_unit must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("plot.grid_extent", plot.grid_extent),
            ("plot.tick_step", plot.tick_step),
            ("plot.sample_extent", plot.sample_extent),
            ("plot.steps_per_unit", plot.steps_per_unit),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{} must be at least 1", name)));
            }
        }
        if plot.grid_extent > MAX_GRID_EXTENT {
            return Err(ConfigError::Invalid(format!(
                "plot.grid_extent must be at most {}",
                MAX_GRID_EXTENT
            )));
        }
        match plot.sample_extent.checked_mul(plot.steps_per_unit) {
            Some(steps) if steps <= MAX_SAMPLE_STEPS => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "plot.sample_extent * plot.steps_per_unit must be at most {}",
                    MAX_SAMPLE_STEPS
                )))
            }
        }
        let [min_w, min_h] = self.window.min_inner_size;
        if min_w <= 0.0 || min_h <= 0.0 {
            return Err(ConfigError::Invalid(
                "window.min_inner_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.plot.pixels_per_unit, 20.0);
        assert_eq!(config.plot.sample_grid().len(), 201);
        assert_eq!(config.window.min_inner_size, [800.0, 600.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config(r#"{ "plot": { "pixels_per_unit": 30.0 } }"#);
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.plot.pixels_per_unit, 30.0);
        assert_eq!(config.plot.grid_extent, 10);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let file = write_config("{ not json");
        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_values_rejected() {
        let file = write_config(r#"{ "plot": { "steps_per_unit": 0 } }"#);
        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_oversized_values_rejected() {
        for json in [
            r#"{ "plot": { "sample_extent": 100000, "steps_per_unit": 100000 } }"#,
            r#"{ "plot": { "sample_extent": 4294967295, "steps_per_unit": 2 } }"#,
            r#"{ "plot": { "grid_extent": 4294967295 } }"#,
        ] {
            let file = write_config(json);
            assert!(
                matches!(AppConfig::load_from(file.path()), Err(ConfigError::Invalid(_))),
                "accepted {}",
                json
            );
        }

        let file = write_config(r#"{ "plot": { "sample_extent": 1000, "steps_per_unit": 100 } }"#);
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.plot.sample_grid().len(), 200_001);
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        // Only this test touches the variable
        std::env::remove_var(CONFIG_ENV);
        assert_eq!(AppConfig::load(), AppConfig::default());

        std::env::set_var(CONFIG_ENV, "/nonexistent/graph_analyzer.json");
        assert_eq!(AppConfig::load(), AppConfig::default());

        let invalid = write_config(r#"{ "plot": { "sample_extent": 100000, "steps_per_unit": 100000 } }"#);
        std::env::set_var(CONFIG_ENV, invalid.path());
        assert_eq!(AppConfig::load(), AppConfig::default());

        let valid = write_config(r#"{ "window": { "title": "Plots" } }"#);
        std::env::set_var(CONFIG_ENV, valid.path());
        assert_eq!(AppConfig::load().window.title, "Plots");

        std::env::remove_var(CONFIG_ENV);
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load_from(Path::new("/nonexistent/graph_analyzer.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
