//! Integer rounding helpers shared by the analyzers.
//!
//! All inputs are non-negative, so "round half away from zero" is "round half
//! up". Integer arithmetic keeps `x.5` boundaries exact.

/// `round(sum / count)`, or 0 when `count` is 0.
pub(crate) fn rounded_mean(sum: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    let (sum, count) = (u128::from(sum), u128::from(count));
    ((2 * sum + count) / (2 * count)) as u64
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0.
pub(crate) fn rounded_percent(part: u64, whole: u64) -> u64 {
    rounded_mean(part.saturating_mul(100), whole)
}

/// `part / whole * 100` without rounding, or 0.0 when `whole` is 0.
pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
