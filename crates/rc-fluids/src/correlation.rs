//! Closed-form R32 property correlations.
//!
//! A lightweight oracle for environments without the CoolProp native library,
//! and a deterministic backend for tests. The model is:
//! - Clausius-Clapeyron saturation line through a reference point
//! - Watson latent heat, vanishing at the critical temperature
//! - constant liquid heat capacity along the saturated liquid line
//! - constant vapor heat capacity in the superheated region
//!
//! Every `(output, input)` combination is explicit, so no lookup iterates.
//! Accuracy against CoolProp is a few percent across 0-60 °C, which is all the
//! refrigeration cycle operates in.

use crate::error::{FluidError, FluidResult};
use crate::oracle::PropertyOracle;
use crate::query::{Property, StateQuery};
use crate::refrigerant::Refrigerant;
use rc_core::units::{Temperature, k, to_k, to_pa};

/// Coefficients of the correlation set (SI units).
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationParams {
    /// Reference saturation temperature [K]
    pub t_ref: f64,
    /// Saturation pressure at `t_ref` [Pa]
    pub p_ref: f64,
    /// Clausius-Clapeyron slope, latent heat over gas constant [K]
    pub clapeyron_slope: f64,
    /// Critical temperature [K]
    pub t_crit: f64,
    /// Saturated liquid enthalpy at `t_ref` [J/kg]
    pub h_liquid_ref: f64,
    /// Saturated liquid entropy at `t_ref` [J/(kg·K)]
    pub s_liquid_ref: f64,
    /// Latent heat at `t_ref` [J/kg]
    pub h_fg_ref: f64,
    /// Watson exponent for latent heat
    pub watson_exponent: f64,
    /// Liquid specific heat [J/(kg·K)]
    pub cp_liquid: f64,
    /// Vapor specific heat [J/(kg·K)]
    pub cp_vapor: f64,
}

impl CorrelationParams {
    /// R32 fit, IIR reference state (h = 200 kJ/kg, s = 1 kJ/(kg·K) at 0 °C liquid).
    pub fn r32() -> Self {
        Self {
            t_ref: 273.15,
            p_ref: 813_000.0,
            clapeyron_slope: 2386.0,
            t_crit: 351.255,
            h_liquid_ref: 200_000.0,
            s_liquid_ref: 1_000.0,
            h_fg_ref: 316_000.0,
            watson_exponent: 0.38,
            cp_liquid: 1_800.0,
            cp_vapor: 1_100.0,
        }
    }
}

/// Fully resolved state: every output of one query.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    p: f64,
    t: f64,
    h: f64,
    s: f64,
}

impl Resolved {
    fn get(&self, output: Property) -> f64 {
        match output {
            Property::Pressure => self.p,
            Property::Temperature => self.t,
            Property::Enthalpy => self.h,
            Property::Entropy => self.s,
        }
    }
}

/// Correlation-based oracle.
#[derive(Debug, Clone)]
pub struct CorrelationOracle {
    params: CorrelationParams,
}

impl Default for CorrelationOracle {
    fn default() -> Self {
        Self::new(CorrelationParams::r32())
    }
}

impl CorrelationOracle {
    pub fn new(params: CorrelationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CorrelationParams {
        &self.params
    }

    fn p_sat(&self, t: f64) -> f64 {
        let c = &self.params;
        c.p_ref * (c.clapeyron_slope * (1.0 / c.t_ref - 1.0 / t)).exp()
    }

    /// Saturation temperature, `None` at or above the critical pressure.
    fn t_sat(&self, p: f64) -> Option<f64> {
        let c = &self.params;
        let inv = 1.0 / c.t_ref - (p / c.p_ref).ln() / c.clapeyron_slope;
        if inv <= 1.0 / c.t_crit {
            return None;
        }
        Some(1.0 / inv)
    }

    fn h_liquid(&self, t: f64) -> f64 {
        let c = &self.params;
        c.h_liquid_ref + c.cp_liquid * (t - c.t_ref)
    }

    fn s_liquid(&self, t: f64) -> f64 {
        let c = &self.params;
        c.s_liquid_ref + c.cp_liquid * (t / c.t_ref).ln()
    }

    fn h_fg(&self, t: f64) -> f64 {
        let c = &self.params;
        c.h_fg_ref * ((c.t_crit - t) / (c.t_crit - c.t_ref)).powf(c.watson_exponent)
    }

    fn saturated(&self, t: f64, q: f64) -> Resolved {
        let h_fg = self.h_fg(t);
        Resolved {
            p: self.p_sat(t),
            t,
            h: self.h_liquid(t) + q * h_fg,
            s: self.s_liquid(t) + q * h_fg / t,
        }
    }

    fn superheated(&self, p: f64, t_sat: f64, t: f64) -> Resolved {
        let c = &self.params;
        let vapor = self.saturated(t_sat, 1.0);
        Resolved {
            p,
            t,
            h: vapor.h + c.cp_vapor * (t - t_sat),
            s: vapor.s + c.cp_vapor * (t / t_sat).ln(),
        }
    }

    fn subcooled(&self, p: f64, t: f64) -> Resolved {
        Resolved {
            p,
            t,
            h: self.h_liquid(t),
            s: self.s_liquid(t),
        }
    }

    fn resolve(&self, input: &StateQuery) -> FluidResult<Resolved> {
        let c = &self.params;
        let invalid = |reason: &str| FluidError::invalid(input.describe(), reason);
        let t_sat_at = |p: f64| {
            self.t_sat(p)
                .ok_or_else(|| invalid("pressure at or above the critical pressure"))
        };

        match *input {
            StateQuery::TQ { t, q } => {
                let t = to_k(t);
                if t >= c.t_crit {
                    return Err(invalid("saturation above the critical temperature"));
                }
                Ok(self.saturated(t, q))
            }
            StateQuery::PQ { p, q } => {
                let t_sat = t_sat_at(to_pa(p))?;
                Ok(self.saturated(t_sat, q))
            }
            StateQuery::PT { p, t } => {
                let (p, t) = (to_pa(p), to_k(t));
                let t_sat = t_sat_at(p)?;
                if t >= t_sat {
                    Ok(self.superheated(p, t_sat, t))
                } else {
                    Ok(self.subcooled(p, t))
                }
            }
            StateQuery::PS { p, s } => {
                let p = to_pa(p);
                let t_sat = t_sat_at(p)?;
                let liquid = self.saturated(t_sat, 0.0);
                let vapor = self.saturated(t_sat, 1.0);
                if s > vapor.s {
                    let t = t_sat * ((s - vapor.s) / c.cp_vapor).exp();
                    Ok(self.superheated(p, t_sat, t))
                } else if s >= liquid.s {
                    let q = (s - liquid.s) / (vapor.s - liquid.s);
                    Ok(Resolved { p, ..self.saturated(t_sat, q) })
                } else {
                    let t = c.t_ref * ((s - c.s_liquid_ref) / c.cp_liquid).exp();
                    Ok(self.subcooled(p, t))
                }
            }
            StateQuery::PH { p, h } => {
                let p = to_pa(p);
                let t_sat = t_sat_at(p)?;
                let liquid = self.saturated(t_sat, 0.0);
                let vapor = self.saturated(t_sat, 1.0);
                if h > vapor.h {
                    let t = t_sat + (h - vapor.h) / c.cp_vapor;
                    Ok(self.superheated(p, t_sat, t))
                } else if h >= liquid.h {
                    let q = (h - liquid.h) / (vapor.h - liquid.h);
                    Ok(Resolved { p, ..self.saturated(t_sat, q) })
                } else {
                    let t = c.t_ref + (h - c.h_liquid_ref) / c.cp_liquid;
                    if t <= 0.0 {
                        return Err(invalid("enthalpy below the correlation's liquid range"));
                    }
                    Ok(self.subcooled(p, t))
                }
            }
        }
    }
}

impl PropertyOracle for CorrelationOracle {
    fn name(&self) -> &str {
        "Correlation"
    }

    fn property(
        &self,
        _refrigerant: Refrigerant,
        output: Property,
        input: StateQuery,
    ) -> FluidResult<f64> {
        input.validate()?;
        let state = self.resolve(&input)?;
        Ok(rc_core::ensure_finite(state.get(output), output.label())?)
    }

    fn critical_temperature(&self, _refrigerant: Refrigerant) -> FluidResult<Temperature> {
        Ok(k(self.params.t_crit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_core::units::{degc, pa, to_kpa};

    const R32: Refrigerant = Refrigerant::R32;

    fn oracle() -> CorrelationOracle {
        CorrelationOracle::default()
    }

    #[test]
    fn saturation_pressure_near_reference_data() {
        // R32 reference: ~1107 kPa at 10 °C, ~3141 kPa at 50 °C
        let o = oracle();
        let p10 = to_kpa(o.saturation_pressure(R32, degc(10.0), 1.0).unwrap());
        let p50 = to_kpa(o.saturation_pressure(R32, degc(50.0), 0.0).unwrap());
        assert!((p10 - 1107.0).abs() / 1107.0 < 0.02, "p10 = {}", p10);
        assert!((p50 - 3141.0).abs() / 3141.0 < 0.02, "p50 = {}", p50);
    }

    #[test]
    fn saturation_line_inverts() {
        let o = oracle();
        let p = o.saturation_pressure(R32, degc(25.0), 0.5).unwrap();
        let t = o
            .property(R32, Property::Temperature, StateQuery::PQ { p, q: 0.5 })
            .unwrap();
        assert!((t - 298.15).abs() < 1e-9);
    }

    #[test]
    fn latent_heat_shrinks_with_temperature() {
        let o = oracle();
        let fg = |c: f64| {
            o.saturation_enthalpy(R32, degc(c), 1.0).unwrap()
                - o.saturation_enthalpy(R32, degc(c), 0.0).unwrap()
        };
        assert!(fg(0.0) > fg(30.0));
        assert!(fg(30.0) > fg(60.0));
        assert!((fg(0.0) - 316_000.0).abs() < 1e-6);
    }

    #[test]
    fn saturation_above_critical_is_invalid() {
        let o = oracle();
        let err = o
            .saturation_pressure(R32, degc(80.0), 0.0)
            .unwrap_err();
        assert!(matches!(err, FluidError::InvalidPropertyQuery { .. }));

        let err = o
            .saturation_enthalpy_at_pressure(R32, pa(7.0e6), 1.0)
            .unwrap_err();
        assert!(matches!(err, FluidError::InvalidPropertyQuery { .. }));
    }

    #[test]
    fn superheated_entropy_inverts() {
        let o = oracle();
        let p = o.saturation_pressure(R32, degc(10.0), 1.0).unwrap();
        let t = degc(16.0);
        let s = o.entropy_pt(R32, p, t).unwrap();
        let t_back = o.temperature_ps(R32, p, s).unwrap();
        assert!((to_k(t_back) - to_k(t)).abs() < 1e-9);
    }

    #[test]
    fn superheated_enthalpy_inverts() {
        let o = oracle();
        let p = o.saturation_pressure(R32, degc(50.0), 0.0).unwrap();
        let t = degc(95.0);
        let h = o.enthalpy_pt(R32, p, t).unwrap();
        let t_back = o.temperature_ph(R32, p, h).unwrap();
        assert!((to_k(t_back) - to_k(t)).abs() < 1e-9);
    }

    #[test]
    fn two_phase_enthalpy_gives_saturation_temperature() {
        let o = oracle();
        let p_evap = o.saturation_pressure(R32, degc(10.0), 1.0).unwrap();
        let h_liq_cond = o.saturation_enthalpy(R32, degc(50.0), 0.0).unwrap();
        let t4 = o.temperature_ph(R32, p_evap, h_liq_cond).unwrap();
        assert!((to_k(t4) - 283.15).abs() < 1e-6);
    }

    #[test]
    fn subcooled_liquid_uses_liquid_line() {
        let o = oracle();
        let p = o.saturation_pressure(R32, degc(50.0), 0.0).unwrap();
        let h = o.enthalpy_pt(R32, p, degc(20.0)).unwrap();
        assert!((h - o.saturation_enthalpy(R32, degc(20.0), 0.0).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn critical_temperature_is_parameter() {
        let t = oracle().critical_temperature(R32).unwrap();
        assert!((to_k(t) - 351.255).abs() < 1e-12);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rc_core::units::degc;

    proptest! {
        #[test]
        fn saturation_pressure_increases_with_temperature(a in -20.0_f64..70.0, b in -20.0_f64..70.0) {
            prop_assume!(a < b);
            let o = CorrelationOracle::default();
            let pa_ = o.saturation_pressure(Refrigerant::R32, degc(a), 1.0).unwrap();
            let pb_ = o.saturation_pressure(Refrigerant::R32, degc(b), 1.0).unwrap();
            prop_assert!(to_pa(pa_) < to_pa(pb_));
        }

        #[test]
        fn vapor_enthalpy_is_above_liquid(c in -20.0_f64..70.0) {
            let o = CorrelationOracle::default();
            let hl = o.saturation_enthalpy(Refrigerant::R32, degc(c), 0.0).unwrap();
            let hv = o.saturation_enthalpy(Refrigerant::R32, degc(c), 1.0).unwrap();
            prop_assert!(hv > hl);
        }
    }
}
