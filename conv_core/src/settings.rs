//! # Settings
//!
//! Display, search and preset-storage settings. Settings files are plain JSON;
//! every field has a default, so a partial file (or none at all) is valid.
//!
//! ```json
//! {
//!   "display": { "decimal_places": 4 },
//!   "search": { "max_results": 10 },
//!   "presets": { "directory": "/var/lib/unitwise/presets" }
//! }
//! ```
//!
//! The `CONV_PRESET_DIR` environment variable overrides the preset directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ConvError, ConvResult};

/// Environment variable overriding [`PresetSettings::directory`]
pub const PRESET_DIR_ENV: &str = "CONV_PRESET_DIR";

/// Root settings container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number formatting
    pub display: DisplaySettings,

    /// Cross-search behaviour
    pub search: SearchSettings,

    /// Preset workspace storage
    pub presets: PresetSettings,
}

impl Settings {
    /// Load settings from a JSON file, then apply environment overrides.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error.
    pub fn load(path: &Path) -> ConvResult<Self> {
        let mut settings = if path.exists() {
            let contents = fs::read_to_string(path)
                .map_err(|e| ConvError::file_error("read settings", path.display().to_string(), e.to_string()))?;
            let parsed: Settings = serde_json::from_str(&contents).map_err(|e| {
                ConvError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
            })?;
            tracing::debug!(path = %path.display(), "loaded settings");
            parsed
        } else {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            Settings::default()
        };

        if let Ok(dir) = std::env::var(PRESET_DIR_ENV) {
            settings.apply_preset_dir_override(&dir);
        }
        settings.validate()?;
        Ok(settings)
    }

    fn apply_preset_dir_override(&mut self, dir: &str) {
        if !dir.trim().is_empty() {
            self.presets.directory = PathBuf::from(dir);
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> ConvResult<()> {
        if self.display.decimal_places > 15 {
            return Err(ConvError::invalid_input(
                "display.decimal_places",
                self.display.decimal_places.to_string(),
                "Must be at most 15",
            ));
        }
        if self.display.significant_digits == 0 || self.display.significant_digits > 17 {
            return Err(ConvError::invalid_input(
                "display.significant_digits",
                self.display.significant_digits.to_string(),
                "Must be between 1 and 17",
            ));
        }
        if !(self.display.scientific_below >= 0.0
            && self.display.scientific_below < self.display.scientific_at_or_above)
        {
            return Err(ConvError::invalid_input(
                "display.scientific_below",
                self.display.scientific_below.to_string(),
                "Must be non-negative and below scientific_at_or_above",
            ));
        }
        Ok(())
    }
}

/// Number formatting for converted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Decimal places in fixed notation (trailing zeros are trimmed)
    pub decimal_places: usize,

    /// Significant digits in scientific notation
    pub significant_digits: usize,

    /// Magnitudes below this print in scientific notation
    pub scientific_below: f64,

    /// Magnitudes at or above this print in scientific notation
    pub scientific_at_or_above: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            decimal_places: 6,
            significant_digits: 6,
            scientific_below: 1e-6,
            scientific_at_or_above: 1e9,
        }
    }
}

/// Cross-search behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Truncate each result list to this many entries (`None` = unlimited)
    pub max_results: Option<usize>,
}

/// Preset workspace storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetSettings {
    /// Directory holding one JSON file per preset
    pub directory: PathBuf,
}

impl Default for PresetSettings {
    fn default() -> Self {
        PresetSettings {
            directory: PathBuf::from("presets"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.display.decimal_places, 6);
        assert_eq!(settings.search.max_results, None);
        assert_eq!(settings.presets.directory, PathBuf::from("presets"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"display":{"decimal_places":3}}"#).unwrap();
        assert_eq!(settings.display.decimal_places, 3);
        assert_eq!(settings.display.significant_digits, 6);
        assert_eq!(settings.search, SearchSettings::default());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = temp_dir().join("unitwise_test_settings_missing.json");
        let _ = fs::remove_file(&path);
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_dir().join("unitwise_test_settings_load.json");
        fs::write(&path, r#"{"search":{"max_results":5}}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.search.max_results, Some(5));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let path = temp_dir().join("unitwise_test_settings_bad.json");
        fs::write(&path, "{not json").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_validate_ranges() {
        let mut settings = Settings::default();
        settings.display.significant_digits = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.display.scientific_below = 1e10;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_preset_dir_override() {
        let mut settings = Settings::default();
        settings.apply_preset_dir_override("/srv/presets");
        assert_eq!(settings.presets.directory, PathBuf::from("/srv/presets"));

        settings.apply_preset_dir_override("  ");
        assert_eq!(settings.presets.directory, PathBuf::from("/srv/presets"));
    }
}
