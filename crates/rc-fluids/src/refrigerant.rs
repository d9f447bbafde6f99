//! Refrigerant identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Working fluid of the cycle.
///
/// The cycle model is calibrated for R32 only; the enum exists so that every
/// property query names its fluid explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Refrigerant {
    /// Difluoromethane (CH2F2)
    #[default]
    R32,
}

impl Refrigerant {
    /// ASHRAE designation.
    pub fn name(&self) -> &'static str {
        match self {
            Refrigerant::R32 => "R32",
        }
    }

    /// CoolProp fluid name.
    pub fn coolprop_name(&self) -> &'static str {
        match self {
            Refrigerant::R32 => "R32",
        }
    }

    /// Map to rfluids Pure enum (internal use for CoolProp backend).
    pub(crate) fn rfluids_pure(&self) -> rfluids::substance::Pure {
        use rfluids::substance::Pure;
        match self {
            Refrigerant::R32 => Pure::R32,
        }
    }
}

impl fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn r32_is_default() {
        assert_eq!(Refrigerant::default(), Refrigerant::R32);
        assert_eq!(Refrigerant::R32.to_string(), "R32");
        assert_eq!(Refrigerant::R32.coolprop_name(), "R32");
    }
}
