//! Per-user session state.
//!
//! A [`Session`] replaces the global state of a single-window program: the
//! current inputs, the last computed cycle and the snapshot store. The
//! desktop frontend owns one; the web frontend keeps one per browser session.

use crate::chart::PhChart;
use crate::config::{AppConfig, ChartConfig};
use crate::error::{AppError, AppResult};
use crate::view::{MetricsView, StateRow, format_metrics, state_rows};
use rc_cycle::{ControlInputs, Cycle, CycleCalculator, OperatingConditions};
use rc_fluids::{PropertyOracle, build_oracle};
use rc_snapshots::{SnapshotError, SnapshotStore, snapshot_label};
use serde::Serialize;
use std::sync::Arc;

/// The cycle currently on display and the inputs behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Computed {
    pub settings: ControlInputs,
    pub cycle: Cycle,
    /// Absent when the cycle came from a snapshot.
    pub conditions: Option<OperatingConditions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Message for the user after an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn from_error(err: &AppError) -> Self {
        let level = if err.is_warning() {
            NoticeLevel::Warning
        } else {
            NoticeLevel::Error
        };
        Self {
            level,
            message: err.to_string(),
        }
    }
}

pub struct Session {
    oracle: Arc<dyn PropertyOracle>,
    chart_config: ChartConfig,
    inputs: ControlInputs,
    current: Option<Computed>,
    store: SnapshotStore,
    base_chart: Option<Arc<PhChart>>,
}

impl Session {
    pub fn new(oracle: Arc<dyn PropertyOracle>, config: &AppConfig) -> Self {
        Self {
            oracle,
            chart_config: config.chart.clone(),
            inputs: config.defaults.clamped(),
            current: None,
            store: SnapshotStore::new(),
            base_chart: None,
        }
    }

    /// Use an already sampled dome instead of sampling one on first use.
    /// `chart` must come from the same oracle and chart config.
    pub fn with_base_chart(mut self, chart: Arc<PhChart>) -> Self {
        self.base_chart = Some(chart);
        self
    }

    /// Session with the oracle named by `config.backend`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(build_oracle(config.backend), config)
    }

    pub fn oracle(&self) -> &Arc<dyn PropertyOracle> {
        &self.oracle
    }

    pub fn inputs(&self) -> ControlInputs {
        self.inputs
    }

    /// Replace the inputs, clamped to the offered ranges. The displayed cycle
    /// is left alone until the next [`Session::calculate`].
    pub fn set_inputs(&mut self, inputs: ControlInputs) {
        self.inputs = inputs.clamped();
    }

    pub fn current(&self) -> Option<&Computed> {
        self.current.as_ref()
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    pub fn snapshot_labels(&self) -> Vec<String> {
        self.store.list()
    }

    /// Compute the cycle for the current inputs.
    ///
    /// On failure the previously displayed cycle stays in place.
    pub fn calculate(&mut self) -> AppResult<&Computed> {
        let solution = CycleCalculator::new(self.oracle.as_ref()).compute_detailed(&self.inputs)?;
        let computed = Computed {
            settings: solution.inputs,
            cycle: solution.cycle,
            conditions: Some(solution.conditions),
        };
        Ok(&*self.current.insert(computed))
    }

    /// Store the displayed cycle under its derived label.
    ///
    /// The label comes from the settings that produced the cycle, not from
    /// inputs edited since.
    pub fn save_snapshot(&mut self) -> AppResult<String> {
        let current = self.current.as_ref().ok_or(AppError::NothingCalculated)?;
        let label = snapshot_label(&current.settings);
        self.store
            .save(label.clone(), current.settings, current.cycle)?;
        tracing::info!(label = %label, count = self.store.len(), "snapshot saved");
        Ok(label)
    }

    /// Restore inputs and cycle from a snapshot without recomputing.
    pub fn load_snapshot(&mut self, label: &str) -> AppResult<&Computed> {
        let snap = self.store.load(require_label(label)?)?;
        self.inputs = snap.settings;
        let computed = Computed {
            settings: snap.settings,
            cycle: snap.cycle,
            conditions: None,
        };
        tracing::debug!(label, "snapshot loaded");
        Ok(&*self.current.insert(computed))
    }

    pub fn delete_snapshot(&mut self, label: &str) -> AppResult<()> {
        self.store.delete(require_label(label)?)?;
        tracing::info!(label, count = self.store.len(), "snapshot deleted");
        Ok(())
    }

    /// Table rows for the displayed cycle, empty before any calculation.
    pub fn state_rows(&self) -> Vec<StateRow> {
        self.current
            .as_ref()
            .map(|c| state_rows(&c.cycle))
            .unwrap_or_default()
    }

    pub fn metrics_view(&self) -> MetricsView {
        self.current
            .as_ref()
            .map(|c| format_metrics(&c.cycle.metrics()))
            .unwrap_or_else(MetricsView::empty)
    }

    /// P-h chart of the displayed cycle. The dome is sampled on first use
    /// unless one was handed over with [`Session::with_base_chart`].
    pub fn chart(&mut self) -> AppResult<PhChart> {
        let base = match &self.base_chart {
            Some(c) => Arc::clone(c),
            None => {
                let c = Arc::new(PhChart::build(self.oracle.as_ref(), &self.chart_config)?);
                self.base_chart = Some(Arc::clone(&c));
                c
            }
        };
        let mut chart = PhChart::clone(&base);
        chart.set_cycle(self.current.as_ref().map(|c| &c.cycle));
        Ok(chart)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("oracle", &self.oracle.name())
            .field("inputs", &self.inputs)
            .field("current", &self.current)
            .field("snapshots", &self.store.len())
            .finish()
    }
}

fn require_label(label: &str) -> AppResult<&str> {
    if label.trim().is_empty() {
        return Err(AppError::InvalidInput("no snapshot selected".to_string()));
    }
    Ok(label)
}

/// Outcome of a save shown to the user.
pub fn save_notice(result: &AppResult<String>) -> Notice {
    match result {
        Ok(label) => Notice::info(format!("Saved snapshot {label}")),
        Err(AppError::Snapshot(SnapshotError::DuplicateLabel { .. })) => Notice {
            level: NoticeLevel::Warning,
            message: "A snapshot of these settings already exists".to_string(),
        },
        Err(err) => Notice::from_error(err),
    }
}
