//! Cycle state points.

use serde::{Deserialize, Serialize};

/// Pressure and specific enthalpy at one point of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    /// Pressure [kPa]
    pub pressure_kpa: f64,
    /// Specific enthalpy [kJ/kg]
    pub enthalpy_kj_per_kg: f64,
}

impl StatePoint {
    pub fn new(pressure_kpa: f64, enthalpy_kj_per_kg: f64) -> Self {
        Self {
            pressure_kpa,
            enthalpy_kj_per_kg,
        }
    }
}

/// Position of a state point in the loop, numbered 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateIndex {
    /// 1: compressor suction
    Suction = 1,
    /// 2: compressor discharge
    Discharge = 2,
    /// 3: condenser outlet
    CondenserOutlet = 3,
    /// 4: evaporator inlet
    EvaporatorInlet = 4,
}

impl StateIndex {
    pub const ALL: [StateIndex; 4] = [
        StateIndex::Suction,
        StateIndex::Discharge,
        StateIndex::CondenserOutlet,
        StateIndex::EvaporatorInlet,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.number() == n)
    }

    pub fn description(self) -> &'static str {
        match self {
            StateIndex::Suction => "Compressor suction",
            StateIndex::Discharge => "Compressor discharge",
            StateIndex::CondenserOutlet => "Condenser outlet",
            StateIndex::EvaporatorInlet => "Evaporator inlet",
        }
    }
}

/// Closed four-point loop 1 -> 2 -> 3 -> 4 -> 1.
///
/// Built through [`Cycle::new`], points 1 and 4 share the evaporator pressure
/// and points 2 and 3 share the condenser pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub suction: StatePoint,
    pub discharge: StatePoint,
    pub condenser_outlet: StatePoint,
    pub evaporator_inlet: StatePoint,
}

impl Cycle {
    /// Assemble a loop from the two pressure levels [kPa] and four enthalpies [kJ/kg].
    pub fn new(evaporator_kpa: f64, condenser_kpa: f64, h: [f64; 4]) -> Self {
        Self {
            suction: StatePoint::new(evaporator_kpa, h[0]),
            discharge: StatePoint::new(condenser_kpa, h[1]),
            condenser_outlet: StatePoint::new(condenser_kpa, h[2]),
            evaporator_inlet: StatePoint::new(evaporator_kpa, h[3]),
        }
    }

    pub fn point(&self, index: StateIndex) -> StatePoint {
        match index {
            StateIndex::Suction => self.suction,
            StateIndex::Discharge => self.discharge,
            StateIndex::CondenserOutlet => self.condenser_outlet,
            StateIndex::EvaporatorInlet => self.evaporator_inlet,
        }
    }

    /// Points in loop order, 1 through 4.
    pub fn points(&self) -> [(StateIndex, StatePoint); 4] {
        StateIndex::ALL.map(|i| (i, self.point(i)))
    }

    /// Polygon vertices (h, P) traversed 1 -> 2 -> 3 -> 4 -> 1.
    pub fn closed_loop(&self) -> [(f64, f64); 5] {
        let p = |sp: StatePoint| (sp.enthalpy_kj_per_kg, sp.pressure_kpa);
        [
            p(self.suction),
            p(self.discharge),
            p(self.condenser_outlet),
            p(self.evaporator_inlet),
            p(self.suction),
        ]
    }

    /// Evaporator pressure [kPa].
    pub fn evaporator_pressure_kpa(&self) -> f64 {
        self.suction.pressure_kpa
    }

    /// Condenser pressure [kPa].
    pub fn condenser_pressure_kpa(&self) -> f64 {
        self.discharge.pressure_kpa
    }

    /// True when both pressure pairs match exactly.
    pub fn pressures_consistent(&self) -> bool {
        self.suction.pressure_kpa == self.evaporator_inlet.pressure_kpa
            && self.discharge.pressure_kpa == self.condenser_outlet.pressure_kpa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Cycle {
        Cycle::new(1107.0, 2700.0, [524.0, 568.0, 275.0, 275.0])
    }

    #[test]
    fn new_shares_pressure_levels() {
        let c = sample();
        assert!(c.pressures_consistent());
        assert_eq!(c.evaporator_pressure_kpa(), 1107.0);
        assert_eq!(c.condenser_pressure_kpa(), 2700.0);
    }

    #[test]
    fn points_in_loop_order() {
        let c = sample();
        let numbers: Vec<u8> = c.points().iter().map(|(i, _)| i.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(c.point(StateIndex::Discharge).enthalpy_kj_per_kg, 568.0);
    }

    #[test]
    fn closed_loop_returns_to_start() {
        let lp = sample().closed_loop();
        assert_eq!(lp[0], lp[4]);
        assert_eq!(lp[1], (568.0, 2700.0));
    }

    #[test]
    fn index_numbering() {
        assert_eq!(StateIndex::from_number(3), Some(StateIndex::CondenserOutlet));
        assert_eq!(StateIndex::from_number(5), None);
        assert_eq!(StateIndex::EvaporatorInlet.number(), 4);
    }

    #[test]
    fn serializes_points_by_name() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["discharge"]["pressure_kpa"], 2700.0);
        assert_eq!(json["evaporator_inlet"]["enthalpy_kj_per_kg"], 275.0);
    }
}
