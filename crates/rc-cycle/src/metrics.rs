//! Performance metrics derived from a cycle.

use crate::cycle::Cycle;
use serde::{Deserialize, Serialize};

/// Specific cooling effect, compressor work and EER of one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// h1 - h4 [kJ/kg]
    pub cooling_effect_kj_per_kg: f64,
    /// h2 - h1 [kJ/kg]
    pub compressor_work_kj_per_kg: f64,
    /// Cooling effect over compressor work; 0 when the work is exactly 0.
    pub eer: f64,
}

pub fn compute_metrics(cycle: &Cycle) -> PerformanceMetrics {
    let h1 = cycle.suction.enthalpy_kj_per_kg;
    let h2 = cycle.discharge.enthalpy_kj_per_kg;
    let h4 = cycle.evaporator_inlet.enthalpy_kj_per_kg;

    let cooling_effect = h1 - h4;
    let compressor_work = h2 - h1;
    let eer = if compressor_work != 0.0 {
        cooling_effect / compressor_work
    } else {
        0.0
    };

    PerformanceMetrics {
        cooling_effect_kj_per_kg: cooling_effect,
        compressor_work_kj_per_kg: compressor_work,
        eer,
    }
}

impl Cycle {
    pub fn metrics(&self) -> PerformanceMetrics {
        compute_metrics(self)
    }
}
