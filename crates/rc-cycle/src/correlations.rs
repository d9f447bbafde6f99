//! Empirical operating-point correlations.
//!
//! At the 60 Hz / 50 % / 750 RPM baseline these give 10 °C evaporation,
//! 42.5 °C condensation, 6 K superheat and no discharge raise. All results are
//! in °C (temperatures) or K (differences).

/// Evaporation temperature [°C]: 5 °C closed, rising 10 K at full opening.
pub fn evaporation_temperature_c(valve_opening: f64) -> f64 {
    5.0 + (valve_opening / 100.0) * 10.0
}

/// Condensation temperature [°C]: 50 °C base, up to 15 K lower at full fan
/// speed, 10 K higher per 60 Hz above 60 Hz.
pub fn condensation_temperature_c(fan_speed: f64, frequency: f64) -> f64 {
    50.0 - (fan_speed / 1500.0) * 15.0 + (frequency - 60.0) / 60.0 * 10.0
}

/// Suction superheat [K]: 10 K closed, falling 8 K at full opening.
pub fn superheat_k(valve_opening: f64) -> f64 {
    10.0 - (valve_opening / 100.0) * 8.0
}

/// Discharge temperature raise [K]: 0.1 K per Hz above 60 Hz.
pub fn discharge_adjustment_k(frequency: f64) -> f64 {
    (frequency - 60.0) * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_operating_point() {
        assert_eq!(evaporation_temperature_c(50.0), 10.0);
        assert_eq!(condensation_temperature_c(750.0, 60.0), 42.5);
        assert_eq!(condensation_temperature_c(0.0, 60.0), 50.0);
        assert_eq!(superheat_k(50.0), 6.0);
        assert_eq!(discharge_adjustment_k(60.0), 0.0);
    }

    #[test]
    fn range_extremes() {
        assert_eq!(evaporation_temperature_c(0.0), 5.0);
        assert_eq!(evaporation_temperature_c(100.0), 15.0);
        assert_eq!(superheat_k(0.0), 10.0);
        assert_eq!(superheat_k(100.0), 2.0);
        assert_eq!(condensation_temperature_c(0.0, 120.0), 60.0);
        assert_eq!(condensation_temperature_c(1500.0, 30.0), 30.0);
        assert_eq!(discharge_adjustment_k(120.0), 6.0);
        assert_eq!(discharge_adjustment_k(30.0), -3.0);
    }
}
