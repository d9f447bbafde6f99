//! Shared application layer for refcycle.
//!
//! Desktop, web and command-line frontends drive the calculator and the
//! snapshot store only through this crate: a [`Session`] holds the state one
//! user sees, and the view and chart models turn a cycle into display data.

pub mod chart;
pub mod config;
pub mod error;
pub mod report;
pub mod session;
pub mod view;

pub use chart::{ChartVertex, PhChart};
pub use config::{AppConfig, ChartConfig, WebConfig, load_yaml, save_yaml};
pub use error::{AppError, AppResult};
pub use report::{ConditionsReport, CycleReport, compute_report};
pub use session::{Computed, Notice, NoticeLevel, Session, save_notice};
pub use view::{MetricsView, StateRow, format_metrics, state_rows};

pub use rc_cycle::{ControlInputs, Cycle, PerformanceMetrics};
pub use rc_fluids::{BackendKind, PropertyOracle, build_oracle};
