//! Property oracle trait and backend selection.

use crate::coolprop::CoolPropOracle;
use crate::correlation::CorrelationOracle;
use crate::error::{FluidError, FluidResult};
use crate::query::{Property, StateQuery};
use crate::refrigerant::Refrigerant;
use rc_core::units::{Pressure, SpecEnthalpy, SpecEntropy, Temperature, k, pa};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Source of refrigerant properties.
///
/// Every lookup is a single-valued query: one output property for one pair of
/// independent state variables. Implementations must be thread-safe
/// (Send + Sync) so a web adapter can share one oracle across sessions.
pub trait PropertyOracle: Send + Sync {
    /// Get the backend name (for debugging/logging).
    fn name(&self) -> &str;

    /// Evaluate `output` at the state fixed by `input`.
    ///
    /// Values are SI: Pa, K, J/kg, J/(kg·K).
    fn property(
        &self,
        refrigerant: Refrigerant,
        output: Property,
        input: StateQuery,
    ) -> FluidResult<f64>;

    /// Critical temperature of the refrigerant.
    fn critical_temperature(&self, refrigerant: Refrigerant) -> FluidResult<Temperature>;

    /// Saturation pressure at temperature `t` and quality `q`.
    fn saturation_pressure(
        &self,
        refrigerant: Refrigerant,
        t: Temperature,
        q: f64,
    ) -> FluidResult<Pressure> {
        let p = self.property(refrigerant, Property::Pressure, StateQuery::TQ { t, q })?;
        validation::positive(p, "saturation pressure").map(pa)
    }

    /// Two-phase enthalpy at temperature `t` and quality `q`.
    fn saturation_enthalpy(
        &self,
        refrigerant: Refrigerant,
        t: Temperature,
        q: f64,
    ) -> FluidResult<SpecEnthalpy> {
        let h = self.property(refrigerant, Property::Enthalpy, StateQuery::TQ { t, q })?;
        validation::finite(h, "saturation enthalpy")
    }

    /// Two-phase enthalpy at pressure `p` and quality `q`.
    fn saturation_enthalpy_at_pressure(
        &self,
        refrigerant: Refrigerant,
        p: Pressure,
        q: f64,
    ) -> FluidResult<SpecEnthalpy> {
        let h = self.property(refrigerant, Property::Enthalpy, StateQuery::PQ { p, q })?;
        validation::finite(h, "saturation enthalpy")
    }

    /// Single-phase enthalpy at (P, T).
    fn enthalpy_pt(
        &self,
        refrigerant: Refrigerant,
        p: Pressure,
        t: Temperature,
    ) -> FluidResult<SpecEnthalpy> {
        let h = self.property(refrigerant, Property::Enthalpy, StateQuery::PT { p, t })?;
        validation::finite(h, "enthalpy")
    }

    /// Single-phase entropy at (P, T).
    fn entropy_pt(
        &self,
        refrigerant: Refrigerant,
        p: Pressure,
        t: Temperature,
    ) -> FluidResult<SpecEntropy> {
        let s = self.property(refrigerant, Property::Entropy, StateQuery::PT { p, t })?;
        validation::finite(s, "entropy")
    }

    /// Temperature at (P, s).
    fn temperature_ps(
        &self,
        refrigerant: Refrigerant,
        p: Pressure,
        s: SpecEntropy,
    ) -> FluidResult<Temperature> {
        let t = self.property(refrigerant, Property::Temperature, StateQuery::PS { p, s })?;
        validation::positive(t, "temperature").map(k)
    }

    /// Temperature at (P, h).
    fn temperature_ph(
        &self,
        refrigerant: Refrigerant,
        p: Pressure,
        h: SpecEnthalpy,
    ) -> FluidResult<Temperature> {
        let t = self.property(refrigerant, Property::Temperature, StateQuery::PH { p, h })?;
        validation::positive(t, "temperature").map(k)
    }
}

/// Available property backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// CoolProp through rfluids.
    #[default]
    #[serde(rename = "coolprop")]
    CoolProp,
    /// Closed-form R32 correlations, no native library.
    Correlation,
}

impl BackendKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::CoolProp => "coolprop",
            Self::Correlation => "correlation",
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "coolprop" | "cool_prop" => Ok(Self::CoolProp),
            "correlation" => Ok(Self::Correlation),
            other => Err(format!("unknown property backend '{}'", other)),
        }
    }
}

/// Construct the oracle for `kind`.
pub fn build_oracle(kind: BackendKind) -> Arc<dyn PropertyOracle> {
    match kind {
        BackendKind::CoolProp => Arc::new(CoolPropOracle::new()),
        BackendKind::Correlation => Arc::new(CorrelationOracle::default()),
    }
}

/// Validation helpers for oracle outputs.
pub(crate) mod validation {
    use super::*;

    /// Ensure a value is finite.
    pub fn finite(v: f64, what: &'static str) -> FluidResult<f64> {
        Ok(rc_core::ensure_finite(v, what)?)
    }

    /// Ensure a value is positive and finite.
    pub fn positive(v: f64, what: &'static str) -> FluidResult<f64> {
        let v = finite(v, what)?;
        if v <= 0.0 {
            return Err(FluidError::Backend {
                message: format!("{} must be positive, got {}", what, v),
            });
        }
        Ok(v)
    }
}
