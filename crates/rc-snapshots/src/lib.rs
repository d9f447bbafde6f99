//! rc-snapshots: named snapshots of control inputs and their computed cycle.

pub mod label;
pub mod store;
pub mod types;

pub use label::snapshot_label;
pub use store::SnapshotStore;
pub use types::Snapshot;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Snapshot already exists: {label}")]
    DuplicateLabel { label: String },

    #[error("Snapshot not found: {label}")]
    NotFound { label: String },
}
