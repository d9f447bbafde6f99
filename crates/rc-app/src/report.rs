//! Serializable result of one stateless computation.

use crate::error::AppResult;
use rc_cycle::{ControlInputs, Cycle, CycleCalculator, OperatingConditions, PerformanceMetrics};
use rc_fluids::PropertyOracle;
use serde::{Deserialize, Serialize};

/// Intermediate temperatures in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionsReport {
    pub evaporation_c: f64,
    pub condensation_c: f64,
    pub superheat_k: f64,
    pub discharge_adjustment_k: f64,
    pub suction_c: f64,
    pub discharge_c: f64,
    pub evaporator_inlet_c: f64,
}

impl From<&OperatingConditions> for ConditionsReport {
    fn from(c: &OperatingConditions) -> Self {
        Self {
            evaporation_c: c.evaporation_c(),
            condensation_c: c.condensation_c(),
            superheat_k: c.superheat_k(),
            discharge_adjustment_k: c.discharge_adjustment_k(),
            suction_c: c.suction_c(),
            discharge_c: c.discharge_c(),
            evaporator_inlet_c: c.evaporator_inlet_c(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleReport {
    pub backend: String,
    pub inputs: ControlInputs,
    pub cycle: Cycle,
    pub metrics: PerformanceMetrics,
    pub conditions: ConditionsReport,
}

/// Compute `inputs` without touching any session.
pub fn compute_report(oracle: &dyn PropertyOracle, inputs: &ControlInputs) -> AppResult<CycleReport> {
    let solution = CycleCalculator::new(oracle).compute_detailed(inputs)?;
    Ok(CycleReport {
        backend: oracle.name().to_string(),
        inputs: solution.inputs,
        cycle: solution.cycle,
        metrics: solution.cycle.metrics(),
        conditions: ConditionsReport::from(&solution.conditions),
    })
}
