//! Property query definitions.

use crate::error::{FluidError, FluidResult};
use rc_core::units::{Pressure, SpecEnthalpy, SpecEntropy, Temperature, to_k, to_pa};

/// Property returned by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Pressure [Pa]
    Pressure,
    /// Temperature [K]
    Temperature,
    /// Specific enthalpy [J/kg]
    Enthalpy,
    /// Specific entropy [J/(kg·K)]
    Entropy,
}

impl Property {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pressure => "P",
            Self::Temperature => "T",
            Self::Enthalpy => "H",
            Self::Entropy => "S",
        }
    }
}

/// Pair of independent state variables that fixes a state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateQuery {
    /// Temperature and vapor quality (saturation).
    TQ { t: Temperature, q: f64 },
    /// Pressure and vapor quality (saturation).
    PQ { p: Pressure, q: f64 },
    /// Pressure and temperature (single phase).
    PT { p: Pressure, t: Temperature },
    /// Pressure and specific entropy.
    PS { p: Pressure, s: SpecEntropy },
    /// Pressure and specific enthalpy.
    PH { p: Pressure, h: SpecEnthalpy },
}

impl StateQuery {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TQ { .. } => "T-Q",
            Self::PQ { .. } => "P-Q",
            Self::PT { .. } => "P-T",
            Self::PS { .. } => "P-S",
            Self::PH { .. } => "P-H",
        }
    }

    /// Human-readable description for error messages.
    pub fn describe(&self) -> String {
        match *self {
            Self::TQ { t, q } => format!("T={:.3} K, Q={}", to_k(t), q),
            Self::PQ { p, q } => format!("P={:.1} Pa, Q={}", to_pa(p), q),
            Self::PT { p, t } => format!("P={:.1} Pa, T={:.3} K", to_pa(p), to_k(t)),
            Self::PS { p, s } => format!("P={:.1} Pa, S={:.3} J/(kg·K)", to_pa(p), s),
            Self::PH { p, h } => format!("P={:.1} Pa, H={:.3} J/kg", to_pa(p), h),
        }
    }

    /// Reject non-finite inputs, non-positive pressures and temperatures, and
    /// qualities outside [0, 1].
    pub fn validate(&self) -> FluidResult<()> {
        match *self {
            Self::TQ { t, q } => {
                validate_temperature(t)?;
                validate_quality(q, self)
            }
            Self::PQ { p, q } => {
                validate_pressure(p)?;
                validate_quality(q, self)
            }
            Self::PT { p, t } => {
                validate_pressure(p)?;
                validate_temperature(t)
            }
            Self::PS { p, s } => {
                validate_pressure(p)?;
                rc_core::ensure_finite(s, "entropy")?;
                Ok(())
            }
            Self::PH { p, h } => {
                validate_pressure(p)?;
                rc_core::ensure_finite(h, "enthalpy")?;
                Ok(())
            }
        }
    }
}

fn validate_pressure(p: Pressure) -> FluidResult<()> {
    let v = rc_core::ensure_finite(to_pa(p), "pressure")?;
    if v <= 0.0 {
        return Err(FluidError::invalid(
            format!("P={} Pa", v),
            "pressure must be positive",
        ));
    }
    Ok(())
}

fn validate_temperature(t: Temperature) -> FluidResult<()> {
    let v = rc_core::ensure_finite(to_k(t), "temperature")?;
    if v <= 0.0 {
        return Err(FluidError::invalid(
            format!("T={} K", v),
            "temperature must be positive",
        ));
    }
    Ok(())
}

fn validate_quality(q: f64, query: &StateQuery) -> FluidResult<()> {
    let q = rc_core::ensure_finite(q, "quality")?;
    if !(0.0..=1.0).contains(&q) {
        return Err(FluidError::invalid(
            query.describe(),
            "quality must lie in [0, 1]",
        ));
    }
    Ok(())
}
