//! Pressure-enthalpy chart model.
//!
//! Plain data for a P-h diagram: the saturation dome, the cycle polygon and
//! the axis window. Frontends render it with whatever plotting they have.

use crate::config::ChartConfig;
use crate::error::AppResult;
use rc_cycle::{Cycle, StateIndex};
use rc_fluids::{PropertyOracle, Refrigerant, SaturationDome, sample_saturation_dome};
use serde::{Deserialize, Serialize};

/// Labeled cycle vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartVertex {
    pub label: String,
    pub enthalpy_kj_per_kg: f64,
    pub pressure_kpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhChart {
    pub dome: SaturationDome,
    /// Vertices 1-4; empty until a cycle is shown.
    pub vertices: Vec<ChartVertex>,
    /// Enthalpy axis [kJ/kg]
    pub h_range: (f64, f64),
    /// Pressure axis [kPa]
    pub p_range: (f64, f64),
}

impl PhChart {
    /// Sample the dome and fix the axis window.
    pub fn build(oracle: &dyn PropertyOracle, config: &ChartConfig) -> AppResult<Self> {
        let dome = sample_saturation_dome(
            oracle,
            Refrigerant::R32,
            config.p_min_kpa,
            config.p_max_kpa,
            config.dome_samples,
        )?;
        Ok(Self::from_dome(dome, config))
    }

    pub fn from_dome(dome: SaturationDome, config: &ChartConfig) -> Self {
        let h_min = dome
            .min_liquid_enthalpy()
            .map(|h| h - config.h_margin_kj_per_kg)
            .unwrap_or(0.0);
        Self {
            dome,
            vertices: Vec::new(),
            h_range: (h_min, config.h_max_kj_per_kg),
            p_range: (config.p_min_kpa, config.p_max_kpa),
        }
    }

    /// Chart with `cycle` drawn over the dome.
    pub fn with_cycle(mut self, cycle: &Cycle) -> Self {
        self.set_cycle(Some(cycle));
        self
    }

    pub fn set_cycle(&mut self, cycle: Option<&Cycle>) {
        self.vertices = cycle
            .map(|c| {
                c.points()
                    .iter()
                    .map(|(idx, pt)| ChartVertex {
                        label: idx.number().to_string(),
                        enthalpy_kj_per_kg: pt.enthalpy_kj_per_kg,
                        pressure_kpa: pt.pressure_kpa,
                    })
                    .collect()
            })
            .unwrap_or_default();
    }

    pub fn has_cycle(&self) -> bool {
        self.vertices.len() == StateIndex::ALL.len()
    }

    /// Closed polygon 1-2-3-4-1 as (h, P).
    pub fn polygon(&self) -> Vec<(f64, f64)> {
        let mut path: Vec<(f64, f64)> = self
            .vertices
            .iter()
            .map(|v| (v.enthalpy_kj_per_kg, v.pressure_kpa))
            .collect();
        if let Some(&first) = path.first() {
            path.push(first);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_fluids::CorrelationOracle;

    fn chart() -> PhChart {
        PhChart::build(&CorrelationOracle::default(), &ChartConfig::default()).unwrap()
    }

    #[test]
    fn window_follows_dome() {
        let chart = chart();
        assert_eq!(chart.dome.len(), 200);
        let h_min = chart.dome.min_liquid_enthalpy().unwrap();
        assert!((chart.h_range.0 - (h_min - 50.0)).abs() < 1e-12);
        assert_eq!(chart.h_range.1, 800.0);
        assert_eq!(chart.p_range, (200.0, 3500.0));
        assert!(!chart.has_cycle());
        assert!(chart.polygon().is_empty());
    }

    #[test]
    fn polygon_closes_on_suction() {
        let cycle = Cycle::new(1100.0, 2600.0, [520.0, 560.0, 270.0, 270.0]);
        let chart = chart().with_cycle(&cycle);
        assert!(chart.has_cycle());

        let labels: Vec<&str> = chart.vertices.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, ["1", "2", "3", "4"]);

        let poly = chart.polygon();
        assert_eq!(poly.len(), 5);
        assert_eq!(poly[0], poly[4]);
        assert_eq!(poly[1], (560.0, 2600.0));
    }

    #[test]
    fn clearing_cycle_keeps_dome() {
        let cycle = Cycle::new(1100.0, 2600.0, [520.0, 560.0, 270.0, 270.0]);
        let mut chart = chart().with_cycle(&cycle);
        chart.set_cycle(None);
        assert!(chart.vertices.is_empty());
        assert_eq!(chart.dome.len(), 200);
    }
}
