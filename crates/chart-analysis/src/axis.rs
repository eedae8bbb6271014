use chart_core::SeriesPoint;

/// Fixed padding added beyond the rounded extreme.
const DOMAIN_MARGIN: f64 = 4.0;

/// Symmetric Y-axis display domain `[-r, r]` for a normalized series.
///
/// Takes the max absolute value across every numeric key, rounds it up to
/// the nearest multiple of 2 and adds a fixed margin, so zero sits in the
/// middle of the chart no matter how asymmetric the swings are. An empty or
/// value-less series yields the margin alone, `(-4.0, 4.0)`.
pub fn symmetric_domain(points: &[SeriesPoint]) -> (f64, f64) {
    let max_abs = points
        .iter()
        .flat_map(|point| point.values.values())
        .fold(0.0_f64, |acc, value| acc.max(value.abs()));

    let bound = (max_abs / 2.0).ceil() * 2.0 + DOMAIN_MARGIN;
    (-bound, bound)
}
