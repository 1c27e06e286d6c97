//! Periodic interpolation over a closed angular loop

use std::f64::consts::TAU;

/// Close a sequence of loop samples by appending the first value.
///
/// The input samples sit at evenly spaced angles covering [0, 2π); the
/// appended value sits at 2π, making the sequence explicitly periodic so
/// interpolation has no seam at the wrap point.
pub(crate) fn close_loop(values: &[f64]) -> Vec<f64> {
    let mut closed = Vec::with_capacity(values.len() + 1);
    closed.extend_from_slice(values);
    closed.push(values[0]);
    closed
}

/// Angles for `count` samples evenly spaced over [0, 2π), excluding 2π.
pub(crate) fn sample_angles(count: usize) -> Vec<f64> {
    let step = TAU / count as f64;
    (0..count).map(|i| i as f64 * step).collect()
}

/// Resample a closed-loop sequence at `target_count` evenly spaced angles.
///
/// The N input values are treated as samples at angles `i * 2π/N`. The loop
/// is closed first, then each target angle is linearly interpolated between
/// its two bracketing source samples. Output always has `target_count`
/// values and is continuous across the wrap point. When `target_count`
/// equals the input length this degenerates to exact sampling.
///
/// Panics on empty input.
pub(crate) fn periodic_interpolate(values: &[f64], target_count: usize) -> Vec<f64> {
    assert!(!values.is_empty(), "cannot interpolate an empty sequence");

    let closed = close_loop(values);
    let source_step = TAU / values.len() as f64;

    sample_angles(target_count)
        .iter()
        .map(|&angle| {
            // angle < 2π, so the bracketing segment index is < N
            let position = angle / source_step;
            let index = (position.floor() as usize).min(values.len() - 1);
            let frac = position - index as f64;
            closed[index] + (closed[index + 1] - closed[index]) * frac
        })
        .collect()
}
