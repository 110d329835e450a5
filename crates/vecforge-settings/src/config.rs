//! Kernel settings for VecForge
//!
//! Numeric knobs for the geometry kernel: sampling precision, curve
//! approximation and serialisation limits. Settings are plain data; the
//! kernel itself takes these values as explicit arguments.
//!
//! Supports JSON and TOML files, chosen by extension, stored in the
//! platform-specific config directory by default.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vecforge_core::constants::{
    COORDINATE_LIMIT, DEFAULT_CONTAINS_PRECISION, DEFAULT_CURVE_SAMPLES, DEFAULT_PRECISION,
};

/// File formats understood by [`KernelSettings::load_from_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Toml,
}

impl SettingsFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Geometry kernel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelSettings {
    /// Chords per curve when measuring lengths and locating points
    pub precision: usize,
    /// Chords per curve for the segment length tables used by resampling
    pub curve_samples: usize,
    /// Polygon samples for containment tests
    pub contains_precision: usize,
    /// Coordinates are clamped to +/- this value in path data
    pub coordinate_limit: f64,
}

impl Default for KernelSettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            curve_samples: DEFAULT_CURVE_SAMPLES,
            contains_precision: DEFAULT_CONTAINS_PRECISION,
            coordinate_limit: COORDINATE_LIMIT,
        }
    }
}

impl KernelSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML). Missing keys take their
    /// defaults.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = SettingsFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            SettingsFormat::Json => serde_json::from_str(&content)?,
            SettingsFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        info!("Loaded kernel settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match SettingsFormat::from_path(path)? {
            SettingsFormat::Json => serde_json::to_string_pretty(self)?,
            SettingsFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Saved kernel settings to {}", path.display());
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.precision == 0 {
            return Err(SettingsError::invalid("precision", "must be at least 1"));
        }

        if self.curve_samples == 0 {
            return Err(SettingsError::invalid("curve_samples", "must be at least 1"));
        }

        if self.contains_precision < 3 {
            return Err(SettingsError::invalid(
                "contains_precision",
                "must be at least 3",
            ));
        }

        if !(self.coordinate_limit.is_finite() && self.coordinate_limit > 0.0) {
            return Err(SettingsError::invalid(
                "coordinate_limit",
                "must be a positive finite number",
            ));
        }

        Ok(())
    }

    /// Merge another settings value into this one. Values in `other` that
    /// would not validate are ignored.
    pub fn merge(&mut self, other: &KernelSettings) {
        if other.precision > 0 {
            self.precision = other.precision;
        }
        if other.curve_samples > 0 {
            self.curve_samples = other.curve_samples;
        }
        if other.contains_precision >= 3 {
            self.contains_precision = other.contains_precision;
        }
        if other.coordinate_limit.is_finite() && other.coordinate_limit > 0.0 {
            self.coordinate_limit = other.coordinate_limit;
        }
    }
}

/// `<config dir>/vecforge/settings.toml`, if the platform has a config
/// directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vecforge").join("settings.toml"))
}
