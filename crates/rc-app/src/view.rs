//! Display formatting for the state table and metrics.

use rc_cycle::{Cycle, PerformanceMetrics};
use serde::Serialize;

/// One row of the state-point table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRow {
    pub point: u8,
    pub description: &'static str,
    pub pressure_kpa: String,
    pub enthalpy_kj_per_kg: String,
}

pub fn state_rows(cycle: &Cycle) -> Vec<StateRow> {
    cycle
        .points()
        .iter()
        .map(|(idx, pt)| StateRow {
            point: idx.number(),
            description: idx.description(),
            pressure_kpa: format!("{:.1}", pt.pressure_kpa),
            enthalpy_kj_per_kg: format!("{:.1}", pt.enthalpy_kj_per_kg),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsView {
    pub cooling_effect: String,
    pub compressor_work: String,
    pub eer: String,
}

pub fn format_metrics(metrics: &PerformanceMetrics) -> MetricsView {
    MetricsView {
        cooling_effect: format!("{:.1} kJ/kg", metrics.cooling_effect_kj_per_kg),
        compressor_work: format!("{:.1} kJ/kg", metrics.compressor_work_kj_per_kg),
        eer: format!("{:.2}", metrics.eer),
    }
}

impl MetricsView {
    /// Placeholder shown before any calculation.
    pub fn empty() -> Self {
        Self {
            cooling_effect: "-- kJ/kg".to_string(),
            compressor_work: "-- kJ/kg".to_string(),
            eer: "--".to_string(),
        }
    }
}
