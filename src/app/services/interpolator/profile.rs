//! Per-column profile interpolation in log-pressure space
//!
//! One call handles one variable of one sounding: filter to finite
//! (pressure, value) pairs, make the pressures strictly unique, refuse to
//! interpolate a column with too few points, and never extrapolate beyond
//! the observed pressure range.

/// Interpolate one column of a profile onto `targets`.
///
/// `pressures` and `values` are parallel slices in any order. Pairs where
/// either side is non-finite are dropped; duplicate pressures keep the first
/// pair in ascending-pressure order (deterministic, matching a stable sort).
/// Fewer than `min_valid` surviving pairs yields all-NaN output of the
/// target's shape. Targets outside the known pressure range yield NaN; a
/// target exactly at a known pressure returns that value bit-identically.
pub fn interpolate_column(
    pressures: &[f64],
    values: &[f64],
    targets: &[f64],
    min_valid: usize,
) -> Vec<f64> {
    debug_assert_eq!(pressures.len(), values.len());

    let mut pairs: Vec<(f64, f64)> = pressures
        .iter()
        .zip(values)
        .filter(|(p, v)| p.is_finite() && v.is_finite())
        .map(|(&p, &v)| (p, v))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    pairs.dedup_by(|next, first| next.0 == first.0);

    if pairs.len() < min_valid {
        return vec![f64::NAN; targets.len()];
    }

    let known_p: Vec<f64> = pairs.iter().map(|(p, _)| *p).collect();
    let known_v: Vec<f64> = pairs.iter().map(|(_, v)| *v).collect();
    targets
        .iter()
        .map(|&t| log_interp(t, &known_p, &known_v))
        .collect()
}

/// Piecewise-linear interpolation of one target in ln(pressure) space.
///
/// `known_p` must be strictly ascending. No extrapolation: outside the known
/// range the result is NaN, never a clamped boundary value.
fn log_interp(target: f64, known_p: &[f64], known_v: &[f64]) -> f64 {
    if known_p.is_empty() || target < known_p[0] || target > known_p[known_p.len() - 1] {
        return f64::NAN;
    }

    let i = known_p.partition_point(|&p| p < target);
    if known_p[i] == target {
        return known_v[i];
    }

    let (p1, p2) = (known_p[i - 1], known_p[i]);
    let (v1, v2) = (known_v[i - 1], known_v[i]);
    v1 + (v2 - v1) * ((target.ln() - p1.ln()) / (p2.ln() - p1.ln()))
}
