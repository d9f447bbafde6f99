//! Control inputs of the outdoor unit.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Three operator-controlled set points.
///
/// The calculator accepts any finite values; the ranges below are what the
/// front-ends offer and clamp to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Compressor frequency [Hz]
    pub frequency: f64,
    /// Electronic expansion valve opening [%]
    pub valve_opening: f64,
    /// Outdoor fan speed [RPM]
    pub fan_speed: f64,
}

impl ControlInputs {
    pub const FREQUENCY_RANGE: RangeInclusive<f64> = 30.0..=120.0;
    pub const VALVE_OPENING_RANGE: RangeInclusive<f64> = 0.0..=100.0;
    pub const FAN_SPEED_RANGE: RangeInclusive<f64> = 0.0..=1500.0;

    pub fn new(frequency: f64, valve_opening: f64, fan_speed: f64) -> Self {
        Self {
            frequency,
            valve_opening,
            fan_speed,
        }
    }

    /// Copy with each input clamped into its offered range.
    ///
    /// NaN inputs fall back to the default value for that input.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        Self {
            frequency: clamp_or(self.frequency, &Self::FREQUENCY_RANGE, defaults.frequency),
            valve_opening: clamp_or(
                self.valve_opening,
                &Self::VALVE_OPENING_RANGE,
                defaults.valve_opening,
            ),
            fan_speed: clamp_or(self.fan_speed, &Self::FAN_SPEED_RANGE, defaults.fan_speed),
        }
    }

    /// True when every input lies inside its offered range.
    pub fn in_range(&self) -> bool {
        Self::FREQUENCY_RANGE.contains(&self.frequency)
            && Self::VALVE_OPENING_RANGE.contains(&self.valve_opening)
            && Self::FAN_SPEED_RANGE.contains(&self.fan_speed)
    }
}

impl Default for ControlInputs {
    /// Baseline operating point: 60 Hz, 50 % opening, 750 RPM.
    fn default() -> Self {
        Self::new(60.0, 50.0, 750.0)
    }
}

fn clamp_or(v: f64, range: &RangeInclusive<f64>, fallback: f64) -> f64 {
    if v.is_nan() {
        return fallback;
    }
    v.clamp(*range.start(), *range.end())
}
