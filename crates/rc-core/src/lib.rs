//! rc-core: shared foundation for refcycle.
//!
//! Contains:
//! - units (uom SI types + constructors, engineering-unit conversions)
//! - numeric (finiteness check, sample grids)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::RcError;
pub use numeric::*;
pub use units::*;
