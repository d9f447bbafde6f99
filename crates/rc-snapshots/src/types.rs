//! Snapshot data types.

use chrono::{DateTime, Utc};
use rc_cycle::{ControlInputs, Cycle};
use serde::{Deserialize, Serialize};

/// Immutable record of a computed cycle and the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub label: String,
    pub settings: ControlInputs,
    pub cycle: Cycle,
    pub saved_at: DateTime<Utc>,
}
