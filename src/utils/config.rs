use crate::algorithms::{GeodeticNavigator, MagneticVariationEstimator};
use crate::core::constants::{
    DEFAULT_WRAPAROUND_THRESHOLD_DEG, WGS84_SEMI_MAJOR_AXIS_M, WGS84_SEMI_MINOR_AXIS_M,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Navigation core configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Reference ellipsoid for the range correction
    pub earth_model: EarthModel,
    /// Apparent heading difference (degrees) treated as a 0°/360° straddle
    pub wraparound_threshold_deg: f64,
    /// Wrap the course back into [0, 360) after adding the variation
    pub normalize_course: bool,
}

/// Ellipsoid axes in meters; a missing axis takes its WGS84 value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarthModel {
    pub semi_major_axis_m: f64,
    pub semi_minor_axis_m: f64,
}

impl EarthModel {
    /// WGS84 Earth model parameters
    pub fn wgs84() -> Self {
        Self {
            semi_major_axis_m: WGS84_SEMI_MAJOR_AXIS_M,
            semi_minor_axis_m: WGS84_SEMI_MINOR_AXIS_M,
        }
    }
}

impl Default for EarthModel {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            earth_model: EarthModel::wgs84(),
            wraparound_threshold_deg: DEFAULT_WRAPAROUND_THRESHOLD_DEG,
            normalize_course: false,
        }
    }
}

impl NavigatorConfig {
    /// Variation estimator built from this configuration
    pub fn estimator(&self) -> MagneticVariationEstimator {
        MagneticVariationEstimator::new(self.wraparound_threshold_deg)
    }

    /// Range/bearing navigator built from this configuration
    pub fn navigator(&self) -> GeodeticNavigator {
        let earth = &self.earth_model;
        GeodeticNavigator::new(earth.semi_major_axis_m, earth.semi_minor_axis_m)
            .with_course_normalization(self.normalize_course)
    }

    /// Check every parameter, returning the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let major = self.earth_model.semi_major_axis_m;
        let minor = self.earth_model.semi_minor_axis_m;

        if !major.is_finite() || major <= 0.0 {
            return Err(ConfigError::invalid(
                "earth_model.semi_major_axis_m",
                major,
                "must be a positive, finite length in meters",
            ));
        }
        if !minor.is_finite() || minor <= 0.0 {
            return Err(ConfigError::invalid(
                "earth_model.semi_minor_axis_m",
                minor,
                "must be a positive, finite length in meters",
            ));
        }
        if minor > major {
            return Err(ConfigError::invalid(
                "earth_model.semi_minor_axis_m",
                minor,
                "must not exceed the semi-major axis",
            ));
        }

        let threshold = self.wraparound_threshold_deg;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 180.0 {
            return Err(ConfigError::invalid(
                "wraparound_threshold_deg",
                threshold,
                "must be in (0, 180] degrees",
            ));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid parameter value
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    #[error("config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON serialization/deserialization error
    #[error("config file '{}': {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// `save` called before any file was loaded or saved
    #[error("no file path set for saving configuration")]
    NoFilePath,
}

impl ConfigError {
    fn invalid(parameter: &str, value: f64, reason: &str) -> Self {
        ConfigError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Holds the active configuration and its backing file
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    config: NavigatorConfig,
    config_file_path: Option<PathBuf>,
    is_modified: bool,
}

impl ConfigurationManager {
    /// Create a configuration manager with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn get_config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Replace the configuration after validating it
    pub fn update_config(&mut self, config: NavigatorConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Change the wraparound threshold, returning the previous value
    pub fn set_wraparound_threshold(&mut self, threshold_deg: f64) -> Result<f64, ConfigError> {
        let mut candidate = self.config.clone();
        candidate.wraparound_threshold_deg = threshold_deg;
        candidate.validate()?;

        let old_value = self.config.wraparound_threshold_deg;
        self.config = candidate;
        self.is_modified = true;
        Ok(old_value)
    }

    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref().to_path_buf();

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: NavigatorConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Serialization {
                path: path.clone(),
                source,
            })?;

        config.validate()?;

        info!(
            path = %path.display(),
            threshold = config.wraparound_threshold_deg,
            "loaded navigator config"
        );
        self.config = config;
        self.config_file_path = Some(path);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref().to_path_buf();

        let content =
            serde_json::to_string_pretty(&self.config).map_err(|source| ConfigError::Serialization {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "saved navigator config");
        self.config_file_path = Some(path);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::NoFilePath),
        }
    }

    /// Check if configuration has been modified since last load or save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }
}
