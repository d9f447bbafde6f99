//! rc-cycle: vapor-compression cycle model.
//!
//! Maps three control inputs (compressor frequency, expansion-valve opening,
//! outdoor fan speed) to the four state points of an R32 refrigeration cycle
//! and its performance metrics. Temperatures come from empirical correlations;
//! every thermodynamic property is a single query to a `PropertyOracle`.

pub mod calculator;
pub mod correlations;
pub mod cycle;
pub mod error;
pub mod inputs;
pub mod metrics;

pub use calculator::{CycleCalculator, CycleSolution, OperatingConditions, compute};
pub use cycle::{Cycle, StateIndex, StatePoint};
pub use error::{CycleError, CycleResult};
pub use inputs::ControlInputs;
pub use metrics::{PerformanceMetrics, compute_metrics};
