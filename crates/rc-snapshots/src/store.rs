//! In-memory snapshot store.

use crate::types::Snapshot;
use crate::{SnapshotError, SnapshotResult};
use chrono::Utc;
use rc_cycle::{ControlInputs, Cycle};

/// Snapshots keyed by label, enumerated in insertion order.
///
/// A store lives as long as the session that owns it; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    entries: Vec<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|s| s.label == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store a new snapshot. An existing entry under `label` is left untouched.
    pub fn save(
        &mut self,
        label: impl Into<String>,
        settings: ControlInputs,
        cycle: Cycle,
    ) -> SnapshotResult<&Snapshot> {
        let label = label.into();
        if self.contains(&label) {
            return Err(SnapshotError::DuplicateLabel { label });
        }
        self.entries.push(Snapshot {
            label,
            settings,
            cycle,
            saved_at: Utc::now(),
        });
        let idx = self.entries.len() - 1;
        Ok(&self.entries[idx])
    }

    pub fn load(&self, label: &str) -> SnapshotResult<&Snapshot> {
        self.entries
            .iter()
            .find(|s| s.label == label)
            .ok_or_else(|| SnapshotError::NotFound {
                label: label.to_string(),
            })
    }

    pub fn delete(&mut self, label: &str) -> SnapshotResult<Snapshot> {
        let idx = self.position(label).ok_or_else(|| SnapshotError::NotFound {
            label: label.to_string(),
        })?;
        Ok(self.entries.remove(idx))
    }

    /// Labels in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.entries.iter().map(|s| s.label.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }
}
