//! Cycle calculator: control inputs to state points.

use crate::correlations;
use crate::cycle::Cycle;
use crate::error::{CycleError, CycleResult};
use crate::inputs::ControlInputs;
use rc_core::units::{TempInterval, Temperature, degc, delta_k, to_degc, to_kilo, to_kpa};
use rc_fluids::{PropertyOracle, Refrigerant};
use uom::si::temperature_interval::kelvin;

/// Intermediate temperatures of one computation.
///
/// Not part of the [`Cycle`]; kept for display and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    pub evaporation: Temperature,
    pub condensation: Temperature,
    pub superheat: TempInterval,
    pub discharge_adjustment: TempInterval,
    /// Compressor suction, evaporation plus superheat
    pub suction: Temperature,
    /// Isentropic discharge temperature plus the frequency adjustment
    pub discharge: Temperature,
    /// Evaporator inlet after isenthalpic throttling
    pub evaporator_inlet: Temperature,
}

impl OperatingConditions {
    pub fn evaporation_c(&self) -> f64 {
        to_degc(self.evaporation)
    }

    pub fn condensation_c(&self) -> f64 {
        to_degc(self.condensation)
    }

    pub fn superheat_k(&self) -> f64 {
        self.superheat.get::<kelvin>()
    }

    pub fn discharge_adjustment_k(&self) -> f64 {
        self.discharge_adjustment.get::<kelvin>()
    }

    pub fn suction_c(&self) -> f64 {
        to_degc(self.suction)
    }

    pub fn discharge_c(&self) -> f64 {
        to_degc(self.discharge)
    }

    pub fn evaporator_inlet_c(&self) -> f64 {
        to_degc(self.evaporator_inlet)
    }
}

/// Cycle together with the conditions that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSolution {
    pub inputs: ControlInputs,
    pub cycle: Cycle,
    pub conditions: OperatingConditions,
}

/// Evaluates the cycle model against a property oracle.
///
/// Holds no state between calls: identical inputs yield identical cycles.
pub struct CycleCalculator<'a> {
    oracle: &'a dyn PropertyOracle,
    refrigerant: Refrigerant,
}

impl<'a> CycleCalculator<'a> {
    pub fn new(oracle: &'a dyn PropertyOracle) -> Self {
        Self {
            oracle,
            refrigerant: Refrigerant::R32,
        }
    }

    pub fn refrigerant(&self) -> Refrigerant {
        self.refrigerant
    }

    pub fn oracle_name(&self) -> &str {
        self.oracle.name()
    }

    /// State points for `inputs`.
    pub fn compute(&self, inputs: &ControlInputs) -> CycleResult<Cycle> {
        self.compute_detailed(inputs).map(|solution| solution.cycle)
    }

    /// State points plus the intermediate temperatures.
    pub fn compute_detailed(&self, inputs: &ControlInputs) -> CycleResult<CycleSolution> {
        let oracle = self.oracle;
        let fluid = self.refrigerant;

        let t_evap_c = correlations::evaporation_temperature_c(inputs.valve_opening);
        let t_cond_c = correlations::condensation_temperature_c(inputs.fan_speed, inputs.frequency);
        let superheat = correlations::superheat_k(inputs.valve_opening);
        let discharge_raise = correlations::discharge_adjustment_k(inputs.frequency);

        let t_evap = degc(t_evap_c);
        let t_cond = degc(t_cond_c);

        let p_evap = oracle
            .saturation_pressure(fluid, t_evap, 1.0)
            .map_err(CycleError::at("evaporator pressure"))?;
        let p_cond = oracle
            .saturation_pressure(fluid, t_cond, 0.0)
            .map_err(CycleError::at("condenser pressure"))?;

        // 1: superheated suction vapor
        let t_suction = degc(t_evap_c + superheat);
        let h1 = oracle
            .enthalpy_pt(fluid, p_evap, t_suction)
            .map_err(CycleError::at("suction enthalpy"))?;
        let s1 = oracle
            .entropy_pt(fluid, p_evap, t_suction)
            .map_err(CycleError::at("suction entropy"))?;

        // 2: isentropic compression to condenser pressure, no efficiency factor
        let t2s = oracle
            .temperature_ps(fluid, p_cond, s1)
            .map_err(CycleError::at("isentropic discharge temperature"))?;
        let t_discharge = degc(to_degc(t2s) + discharge_raise);
        let h2 = oracle
            .enthalpy_pt(fluid, p_cond, t_discharge)
            .map_err(CycleError::at("discharge enthalpy"))?;

        // 3: saturated liquid leaving the condenser
        let h3 = oracle
            .saturation_enthalpy(fluid, t_cond, 0.0)
            .map_err(CycleError::at("condenser outlet enthalpy"))?;

        // 4: isenthalpic throttling
        let h4 = h3;
        let t4 = oracle
            .temperature_ph(fluid, p_evap, h4)
            .map_err(CycleError::at("evaporator inlet temperature"))?;

        let cycle = Cycle::new(
            to_kpa(p_evap),
            to_kpa(p_cond),
            [to_kilo(h1), to_kilo(h2), to_kilo(h3), to_kilo(h4)],
        );

        let conditions = OperatingConditions {
            evaporation: t_evap,
            condensation: t_cond,
            superheat: delta_k(superheat),
            discharge_adjustment: delta_k(discharge_raise),
            suction: t_suction,
            discharge: t_discharge,
            evaporator_inlet: t4,
        };

        tracing::debug!(
            backend = oracle.name(),
            frequency = inputs.frequency,
            valve_opening = inputs.valve_opening,
            fan_speed = inputs.fan_speed,
            t_evap_c,
            t_cond_c,
            t_discharge_c = conditions.discharge_c(),
            t4_c = conditions.evaporator_inlet_c(),
            "cycle computed"
        );

        Ok(CycleSolution {
            inputs: *inputs,
            cycle,
            conditions,
        })
    }
}

/// One-shot form of [`CycleCalculator::compute`].
pub fn compute(
    oracle: &dyn PropertyOracle,
    frequency: f64,
    valve_opening: f64,
    fan_speed: f64,
) -> CycleResult<Cycle> {
    CycleCalculator::new(oracle).compute(&ControlInputs::new(frequency, valve_opening, fan_speed))
}
