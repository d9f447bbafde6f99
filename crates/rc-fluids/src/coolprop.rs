//! CoolProp-based property oracle.

use crate::error::{FluidError, FluidResult};
use crate::oracle::PropertyOracle;
use crate::query::{Property, StateQuery};
use crate::refrigerant::Refrigerant;
use rc_core::units::{Temperature, k, to_k, to_pa};
use rfluids::prelude::*;

/// CoolProp backend for refrigerant properties.
///
/// Each query defines a fresh rfluids `Fluid` from the input pair and reads one
/// output. CoolProp handles every pair natively, so no solving happens here.
///
/// Thread-safe: rfluids Fluid instances are created per call and never shared.
#[derive(Debug, Default)]
pub struct CoolPropOracle {}

impl CoolPropOracle {
    /// Create a new CoolProp oracle.
    pub fn new() -> Self {
        Self {}
    }

    /// Create a Fluid instance at the state fixed by `input`.
    fn fluid_at(&self, refrigerant: Refrigerant, input: &StateQuery) -> FluidResult<Fluid> {
        let (first, second) = match *input {
            StateQuery::TQ { t, q } => (
                FluidInput::temperature(to_k(t)),
                FluidInput::quality(q),
            ),
            StateQuery::PQ { p, q } => (FluidInput::pressure(to_pa(p)), FluidInput::quality(q)),
            StateQuery::PT { p, t } => (
                FluidInput::pressure(to_pa(p)),
                FluidInput::temperature(to_k(t)),
            ),
            StateQuery::PS { p, s } => (FluidInput::pressure(to_pa(p)), FluidInput::entropy(s)),
            StateQuery::PH { p, h } => (FluidInput::pressure(to_pa(p)), FluidInput::enthalpy(h)),
        };

        Fluid::from(refrigerant.rfluids_pure())
            .in_state(first, second)
            .map_err(|e| {
                FluidError::invalid(
                    format!("{} {} ({})", refrigerant, input.label(), input.describe()),
                    format!("rfluids error: {}", e),
                )
            })
    }
}

impl PropertyOracle for CoolPropOracle {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn property(
        &self,
        refrigerant: Refrigerant,
        output: Property,
        input: StateQuery,
    ) -> FluidResult<f64> {
        input.validate()?;

        let mut fluid = self.fluid_at(refrigerant, &input)?;
        let value = match output {
            Property::Pressure => fluid.pressure(),
            Property::Temperature => fluid.temperature(),
            Property::Enthalpy => fluid.enthalpy(),
            Property::Entropy => fluid.entropy(),
        };

        value.map_err(|e| {
            FluidError::invalid(
                format!("{} {} at {}", refrigerant, output.label(), input.describe()),
                format!("rfluids error getting {}: {}", output.label(), e),
            )
        })
    }

    fn critical_temperature(&self, refrigerant: Refrigerant) -> FluidResult<Temperature> {
        // Any defined state exposes the trivial outputs; ambient conditions are always valid.
        let mut fluid = Fluid::from(refrigerant.rfluids_pure())
            .in_state(
                FluidInput::pressure(101_325.0),
                FluidInput::temperature(298.15),
            )
            .map_err(|e| FluidError::Backend {
                message: format!("rfluids error defining reference state: {}", e),
            })?;

        let t_crit = fluid.critical_temperature().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting critical temperature: {}", e),
        })?;
        Ok(k(t_crit))
    }
}
