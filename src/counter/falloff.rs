//! The Gaussian ripple curve around the selected tick.
//!
//! While the user drags, every tick is displaced laterally by a
//! distance-weighted offset centered on the selection, producing a smooth
//! bulge that follows the handle.

/// Peak lateral excursion in pixels, reached by the selected tick itself.
pub const MAX_OFFSET: f32 = 23.0;

/// Width of the bell; the ripple is visually gone past `3 * SIGMA` ticks.
pub const SIGMA: f32 = 5.0;

/// Lateral offset for `tick_index` given the current selection.
///
/// Depends only on `|selected_index - tick_index|`, so it is symmetric in
/// its arguments, maximal when they coincide, and strictly decreasing with
/// distance.
pub fn gaussian_offset(selected_index: usize, tick_index: usize) -> f32 {
    let distance = selected_index.abs_diff(tick_index) as f32;
    let weight = (-(distance * distance) / (2.0 * SIGMA * SIGMA)).exp();
    weight * MAX_OFFSET
}
