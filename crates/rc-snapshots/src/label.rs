//! Snapshot label derivation.

use rc_cycle::ControlInputs;

/// Label under which `settings` are stored.
///
/// Frequency and valve opening are rounded to one decimal and fan speed is
/// truncated toward zero, so settings that differ below that precision share
/// a label.
pub fn snapshot_label(settings: &ControlInputs) -> String {
    format!(
        "Comp_{:.1}Hz_EEV_{:.1}%_Fan_{}RPM",
        settings.frequency,
        settings.valve_opening,
        settings.fan_speed.trunc() as i64
    )
}
