//! Application configuration.
//!
//! Read from YAML; every field has a default so a partial file, or no file at
//! all, yields a usable configuration.

use crate::error::{AppError, AppResult};
use rc_cycle::ControlInputs;
use rc_fluids::BackendKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub defaults: ControlInputs,
    pub chart: ChartConfig,
    pub web: WebConfig,
}

/// P-h chart window and dome sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub p_min_kpa: f64,
    pub p_max_kpa: f64,
    pub dome_samples: usize,
    /// Upper enthalpy limit [kJ/kg]
    pub h_max_kj_per_kg: f64,
    /// Margin left of the lowest saturated liquid enthalpy [kJ/kg]
    pub h_margin_kj_per_kg: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            p_min_kpa: 200.0,
            p_max_kpa: 3500.0,
            dome_samples: 200,
            h_max_kj_per_kg: 800.0,
            h_margin_kj_per_kg: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub bind: String,
    /// Sessions untouched for this long are dropped [s]
    pub session_idle_secs: u64,
    /// Upper bound on live sessions; the least recently used goes first.
    pub max_sessions: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            session_idle_secs: 30 * 60,
            max_sessions: 1024,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> AppResult<()> {
        let c = &self.chart;
        if !(c.p_min_kpa.is_finite() && c.p_max_kpa.is_finite()) || c.p_min_kpa <= 0.0 {
            return Err(AppError::Config(format!(
                "chart pressure range must be positive, got {}..{} kPa",
                c.p_min_kpa, c.p_max_kpa
            )));
        }
        if c.p_max_kpa <= c.p_min_kpa {
            return Err(AppError::Config(format!(
                "chart p_max_kpa ({}) must exceed p_min_kpa ({})",
                c.p_max_kpa, c.p_min_kpa
            )));
        }
        if c.dome_samples < 2 {
            return Err(AppError::Config(
                "chart dome_samples must be at least 2".to_string(),
            ));
        }
        if self.web.bind.trim().is_empty() {
            return Err(AppError::Config("web bind address is empty".to_string()));
        }
        if self.web.max_sessions == 0 {
            return Err(AppError::Config(
                "web max_sessions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Config at `path`, or the defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => load_yaml(p),
            None => Ok(Self::default()),
        }
    }
}

pub fn load_yaml(path: &Path) -> AppResult<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

pub fn save_yaml(path: &Path, config: &AppConfig) -> AppResult<()> {
    config.validate()?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content).map_err(|source| AppError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("backend: correlation\n").unwrap();
        assert_eq!(config.backend, BackendKind::Correlation);
        assert_eq!(config.chart, ChartConfig::default());
        assert_eq!(config.defaults, ControlInputs::default());
    }

    #[test]
    fn rejects_inverted_pressure_window() {
        let mut config = AppConfig::default();
        config.chart.p_min_kpa = 4000.0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn rejects_single_sample() {
        let mut config = AppConfig::default();
        config.chart.dome_samples = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_session_cap() {
        let mut config = AppConfig::default();
        config.web.max_sessions = 0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn missing_path_is_default() {
        assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
    }
}
