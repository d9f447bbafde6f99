//! Error types for the rc-app layer.

use std::path::PathBuf;

/// Errors surfaced to frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Cycle(#[from] rc_cycle::CycleError),

    #[error(transparent)]
    Fluid(#[from] rc_fluids::FluidError),

    #[error(transparent)]
    Snapshot(#[from] rc_snapshots::SnapshotError),

    #[error("Nothing has been calculated yet")]
    NothingCalculated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether the error is a recoverable notice rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            AppError::Snapshot(rc_snapshots::SnapshotError::DuplicateLabel { .. })
        )
    }
}
