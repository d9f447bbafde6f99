//! rc-fluids: refrigerant property lookups for refcycle.
//!
//! Provides:
//! - The refrigerant identifier (R32 is the only supported fluid)
//! - Property queries: an output property plus one pair of independent variables
//! - `PropertyOracle` trait that isolates the cycle model from backend dependencies
//! - CoolProp backend for real fluid properties
//! - A closed-form correlation backend that needs no native library
//! - Saturation dome sampling for P-h diagrams
//!
//! # Architecture
//!
//! The cycle calculator never talks to CoolProp directly. It asks a
//! `&dyn PropertyOracle` for single-valued properties, so backends can be swapped
//! (library-backed, correlation-based, or stubbed in tests) without touching
//! the calculator.
//!
//! # Example
//!
//! ```no_run
//! use rc_fluids::{CoolPropOracle, PropertyOracle, Refrigerant};
//! use rc_core::units::{degc, to_kpa};
//!
//! let oracle = CoolPropOracle::new();
//! let p = oracle
//!     .saturation_pressure(Refrigerant::R32, degc(10.0), 1.0)
//!     .unwrap();
//! println!("P_sat(10 °C) = {:.1} kPa", to_kpa(p));
//! ```

pub mod coolprop;
pub mod correlation;
pub mod dome;
pub mod error;
pub mod oracle;
pub mod query;
pub mod refrigerant;

// Re-exports for ergonomics
pub use coolprop::CoolPropOracle;
pub use correlation::{CorrelationOracle, CorrelationParams};
pub use dome::{SaturationDome, sample_saturation_dome};
pub use error::{FluidError, FluidResult};
pub use oracle::{BackendKind, PropertyOracle, build_oracle};
pub use query::{Property, StateQuery};
pub use refrigerant::Refrigerant;
