use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_surface_detection_delay_ms")]
    pub surface_detection_delay_ms: u64,
    /// Stand-in for the platform camera permission prompt.
    #[serde(default = "default_true")]
    pub camera_permission_granted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    #[serde(default = "default_pixels_per_meter")]
    pub pixels_per_meter: f32,
    #[serde(default = "default_tap_tolerance_px")]
    pub tap_tolerance_px: f32,
    #[serde(default = "default_min_scale")]
    pub min_scale: f32,
    #[serde(default = "default_max_scale")]
    pub max_scale: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub file: Option<String>,
}

// Default value functions
fn default_surface_detection_delay_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

fn default_pixels_per_meter() -> f32 {
    100.0
}

fn default_tap_tolerance_px() -> f32 {
    50.0
}

fn default_min_scale() -> f32 {
    0.5
}

fn default_max_scale() -> f32 {
    3.0
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            surface_detection_delay_ms: default_surface_detection_delay_ms(),
            camera_permission_granted: true,
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: default_pixels_per_meter(),
            tap_tolerance_px: default_tap_tolerance_px(),
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
        }
    }
}

impl SessionConfig {
    pub fn surface_detection_delay(&self) -> Duration {
        Duration::from_millis(self.surface_detection_delay_ms)
    }
}

/// Get the path to the config file
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dirs = directories::ProjectDirs::from("", "", "furniture-ar").ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

fn try_load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Load configuration from `explicit` or the default location.
///
/// Missing files yield defaults silently, unreadable or malformed ones with a warning.
pub fn load_config(explicit: Option<&Path>) -> AppConfig {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "using default config");
                return AppConfig::default();
            }
        },
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return AppConfig::default();
    }

    match try_load_config_file(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "using default config");
            AppConfig::default()
        }
    }
}
