//! Saturation dome sampling for P-h diagrams.

use crate::error::FluidResult;
use crate::oracle::PropertyOracle;
use crate::refrigerant::Refrigerant;
use rc_core::units::{kpa, to_kilo};
use serde::{Deserialize, Serialize};

/// Saturated liquid and vapor lines over a pressure range.
///
/// All three vectors have the same length; element `i` of each belongs to the
/// same pressure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaturationDome {
    /// Pressures [kPa]
    pub pressures_kpa: Vec<f64>,
    /// Saturated liquid enthalpy, quality 0 [kJ/kg]
    pub liquid_kj_per_kg: Vec<f64>,
    /// Saturated vapor enthalpy, quality 1 [kJ/kg]
    pub vapor_kj_per_kg: Vec<f64>,
}

impl SaturationDome {
    pub fn len(&self) -> usize {
        self.pressures_kpa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressures_kpa.is_empty()
    }

    /// Lowest saturated liquid enthalpy [kJ/kg], `None` for an empty dome.
    pub fn min_liquid_enthalpy(&self) -> Option<f64> {
        self.liquid_kj_per_kg.iter().copied().reduce(f64::min)
    }

    /// Liquid line as (h, P) pairs.
    pub fn liquid_line(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.liquid_kj_per_kg
            .iter()
            .copied()
            .zip(self.pressures_kpa.iter().copied())
    }

    /// Vapor line as (h, P) pairs.
    pub fn vapor_line(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.vapor_kj_per_kg
            .iter()
            .copied()
            .zip(self.pressures_kpa.iter().copied())
    }
}

/// Sample the dome at `num_points` pressures spaced linearly from `p_min_kpa`
/// to `p_max_kpa` inclusive.
pub fn sample_saturation_dome(
    oracle: &dyn PropertyOracle,
    refrigerant: Refrigerant,
    p_min_kpa: f64,
    p_max_kpa: f64,
    num_points: usize,
) -> FluidResult<SaturationDome> {
    let pressures_kpa = rc_core::linspace(p_min_kpa, p_max_kpa, num_points);
    let mut liquid_kj_per_kg = Vec::with_capacity(pressures_kpa.len());
    let mut vapor_kj_per_kg = Vec::with_capacity(pressures_kpa.len());

    for &p in &pressures_kpa {
        let h_l = oracle.saturation_enthalpy_at_pressure(refrigerant, kpa(p), 0.0)?;
        let h_v = oracle.saturation_enthalpy_at_pressure(refrigerant, kpa(p), 1.0)?;
        liquid_kj_per_kg.push(to_kilo(h_l));
        vapor_kj_per_kg.push(to_kilo(h_v));
    }

    Ok(SaturationDome {
        pressures_kpa,
        liquid_kj_per_kg,
        vapor_kj_per_kg,
    })
}
