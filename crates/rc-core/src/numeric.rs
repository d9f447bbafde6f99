use crate::RcError;

/// `v` unchanged if it is finite, otherwise a [`RcError::NonFinite`] naming
/// the quantity.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, RcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RcError::NonFinite { what, value: v })
    }
}

/// Evenly spaced values from `start` to `end` inclusive.
///
/// The last element is exactly `end`. Fewer than two points yields `[start]`.
pub fn linspace(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    if num_points <= 1 {
        return vec![start];
    }
    let step = (end - start) / (num_points - 1) as f64;
    (0..num_points)
        .map(|i| if i + 1 == num_points { end } else { start + i as f64 * step })
        .collect()
}
