//! Affine rescaling of raw scores

/// Rescale raw percentage-like scores into the chart's radial range.
///
/// Each value is mapped through `(x - 50) * 2`, so a raw score of 50 lands
/// at the center and 100 at the outer radius. Out-of-range input is
/// accepted unvalidated.
pub(crate) fn rescale(values: &[f64]) -> Vec<f64> {
    values.iter().map(|&x| (x - 50.0) * 2.0).collect()
}
