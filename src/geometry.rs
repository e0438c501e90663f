//! Scalar and 2D helpers shared by the layout phases.

use kurbo::Vec2;

/// Linearly remap `value` from `[actual_min, actual_max]` onto `[target_min, target_max]`.
///
/// A zero-width source range yields `target_min`.
pub fn interpolate(
    actual_min: f64,
    actual_max: f64,
    value: f64,
    target_min: f64,
    target_max: f64,
) -> f64 {
    if actual_max - actual_min == 0.0 {
        return target_min;
    }
    (value - actual_min) / (actual_max - actual_min) * (target_max - target_min) + target_min
}

/// Euclidean distance of an offset from the origin.
pub fn distance(offset: Vec2) -> f64 {
    offset.hypot()
}

/// Offset of a point from the inner corner pivot of a rounded rectangle.
///
/// Both components are measured on absolute coordinates, so the result is
/// always in the first quadrant frame regardless of which corner is nearest.
pub fn corner_offset(offset: Vec2, radii: Vec2, corner_radius: f64) -> Vec2 {
    Vec2::new(
        offset.x.abs() - radii.x + corner_radius,
        offset.y.abs() - radii.y + corner_radius,
    )
}

/// `-1`, `0` or `1` following the sign of `v` (zero stays zero).
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
