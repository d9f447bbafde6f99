//! Cycle computation errors.

use rc_fluids::FluidError;
use thiserror::Error;

pub type CycleResult<T> = Result<T, CycleError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// A property lookup failed; no partial cycle is produced.
    #[error("Property lookup failed while computing {stage}: {source}")]
    Property {
        stage: &'static str,
        #[source]
        source: FluidError,
    },
}

impl CycleError {
    /// Attach the derivation step to an oracle failure.
    pub(crate) fn at(stage: &'static str) -> impl FnOnce(FluidError) -> Self {
        move |source| CycleError::Property { stage, source }
    }

    pub fn stage(&self) -> &'static str {
        match self {
            CycleError::Property { stage, .. } => stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_stage() {
        let err = CycleError::at("condenser pressure")(FluidError::Backend {
            message: "boom".into(),
        });
        assert_eq!(err.stage(), "condenser pressure");
        let msg = err.to_string();
        assert!(msg.contains("condenser pressure"));
        assert!(msg.contains("boom"));
    }
}
