//! Application configuration.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/lifecal/config.json`.
//! Every section and key is optional; a missing file means all defaults.
//!
//! # Example
//!
//! ```json
//! {
//!   "grid": { "columns": 32 },
//!   "clock": {
//!     "time_format": "%H:%M",
//!     "date_format": "%a, %b %-d",
//!     "locale": "en_US"
//!   },
//!   "surface": { "refresh_secs": 60, "namespace": "lifecal" }
//! }
//! ```

use crate::format::{ClockFormatter, FormatError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dot grid settings.
    #[serde(default)]
    pub grid: GridConfig,

    /// Clock and date text settings.
    #[serde(default)]
    pub clock: ClockConfig,

    /// Overlay window settings.
    #[serde(default)]
    pub surface: SurfaceConfig,
}

/// Dot grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Dots per row.  32 gives roughly a 3:1 block for a full year.
    pub columns: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { columns: 32 }
    }
}

/// Clock and date text settings.
///
/// Both formats use chrono's strftime syntax.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub time_format: String,
    pub date_format: String,
    /// POSIX-style locale name (`"en_US"`, `"de_DE"`, …) used for weekday
    /// and month names.
    pub locale: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_format: "%H:%M".into(),
            date_format: "%a, %b %-d".into(),
            locale: "en_US".into(),
        }
    }
}

/// Overlay window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Seconds between redraws.  The displayed time may lag by up to this
    /// much.
    pub refresh_secs: u64,
    /// Layer-shell namespace of the overlay windows.
    pub namespace: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            refresh_secs: 60,
            namespace: "lifecal".into(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Check the values serde cannot, returning the clock formatter they
    /// describe.
    pub fn validate(&self) -> Result<ClockFormatter, ConfigError> {
        if self.grid.columns == 0 {
            return Err(ConfigError::Invalid("grid.columns must be at least 1".into()));
        }
        if self.surface.refresh_secs == 0 {
            return Err(ConfigError::Invalid(
                "surface.refresh_secs must be at least 1".into(),
            ));
        }
        Ok(ClockFormatter::from_config(&self.clock)?)
    }
}

/// Error from loading, parsing or validating a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("invalid config: {0}")]
    Clock(#[from] FormatError),
}

impl ConfigError {
    /// Whether the file simply was not there (or not readable), as opposed
    /// to present but wrong.
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::Read { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "grid": { "columns": 24 },
            "clock": {
                "time_format": "%I:%M",
                "date_format": "%A %-d %B",
                "locale": "de_DE"
            },
            "surface": { "refresh_secs": 30, "namespace": "wallpaper" }
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.grid.columns, 24);
        assert_eq!(cfg.clock.time_format, "%I:%M");
        assert_eq!(cfg.clock.date_format, "%A %-d %B");
        assert_eq!(cfg.clock.locale, "de_DE");
        assert_eq!(cfg.surface.refresh_secs, 30);
        assert_eq!(cfg.surface.namespace, "wallpaper");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.grid.columns, GridConfig::default().columns);
        let cd = ClockConfig::default();
        assert_eq!(cfg.clock.time_format, cd.time_format);
        assert_eq!(cfg.clock.date_format, cd.date_format);
        assert_eq!(cfg.clock.locale, cd.locale);
        let sd = SurfaceConfig::default();
        assert_eq!(cfg.surface.refresh_secs, sd.refresh_secs);
        assert_eq!(cfg.surface.namespace, sd.namespace);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn deserialize_partial_clock() {
        let json = r#"{ "clock": { "locale": "fr_FR" } }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.clock.locale, "fr_FR");
        assert_eq!(cfg.clock.time_format, ClockConfig::default().time_format);
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r##"{ "grid": {}, "theme": { "accent": "#ff4500" } }"##;
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn zero_columns_rejected() {
        let cfg: Config = serde_json::from_str(r#"{ "grid": { "columns": 0 } }"#).unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_refresh_rejected() {
        let cfg: Config =
            serde_json::from_str(r#"{ "surface": { "refresh_secs": 0 } }"#).unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn bad_locale_rejected() {
        let cfg: Config =
            serde_json::from_str(r#"{ "clock": { "locale": "klingon" } }"#).unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::Clock(_))));
    }

    #[test]
    fn missing_file_is_distinguished() {
        let err = Config::load(Path::new("/nonexistent/lifecal/config.json")).unwrap_err();
        assert!(err.is_missing());
    }
}
