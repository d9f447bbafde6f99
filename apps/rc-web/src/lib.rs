//! Browser frontend for the refrigeration cycle calculator.
//!
//! Each browser gets its own [`rc_app::Session`], found through a cookie.
//! HTML form posts drive the session and redirect back to the page; the JSON
//! routes expose the same data to scripts.

pub mod error;
pub mod render;
pub mod routes;
pub mod sessions;
pub mod telemetry;

pub use error::ApiError;
pub use routes::{AppState, router};
pub use sessions::{SESSION_COOKIE, SessionRegistry, WebSession};
