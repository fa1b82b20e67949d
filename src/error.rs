//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::state::PlacedId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),

    #[error("catalog item {id} has non-positive {axis} ({value})")]
    InvalidDimension {
        id: String,
        axis: &'static str,
        value: f32,
    },

    #[error("catalog is empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Reasons a place request is refused. The store is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("Please select furniture and ensure a plane is detected")]
    SelectionOrSurfaceMissing,

    #[error("No AR session is active")]
    SessionInactive,
}

impl PlacementError {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            PlacementError::SelectionOrSurfaceMissing => "selection-or-surface-missing",
            PlacementError::SessionInactive => "session-inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("placed item {0} not found")]
    NotFound(PlacedId),

    #[error("invalid transform value {0}")]
    InvalidValue(f32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Camera permission is required for AR features")]
    PermissionDenied,
}
