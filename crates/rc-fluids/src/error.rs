//! Property lookup errors.

use rc_core::RcError;
use thiserror::Error;

/// Result type for property lookups.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors raised by a property oracle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// The requested state lies outside the refrigerant's valid envelope, or the
    /// input pair is degenerate (e.g. saturation above the critical temperature).
    #[error("Invalid property query {query}: {reason}")]
    InvalidPropertyQuery { query: String, reason: String },

    /// Input value is NaN or infinite.
    #[error("Non-finite input for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Backend (CoolProp) error not tied to a specific state.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl FluidError {
    pub(crate) fn invalid(query: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPropertyQuery {
            query: query.into(),
            reason: reason.into(),
        }
    }
}

impl From<RcError> for FluidError {
    fn from(err: RcError) -> Self {
        match err {
            RcError::NonFinite { what, value } => FluidError::NonFinite { what, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::invalid("T-Q", "above critical temperature");
        let msg = err.to_string();
        assert!(msg.contains("T-Q"));
        assert!(msg.contains("critical"));

        let err = FluidError::Backend {
            message: "CoolProp failed".into(),
        };
        assert!(err.to_string().contains("CoolProp"));
    }

    #[test]
    fn non_finite_core_error_converts() {
        let core = rc_core::ensure_finite(f64::NAN, "entropy").unwrap_err();
        let err: FluidError = core.into();
        assert!(matches!(err, FluidError::NonFinite { what: "entropy", .. }));
    }
}
