// Centralized tolerance helpers. Every epsilon comparison in the crate goes
// through one of these so the numeric policy stays in one place.

use crate::constants::{DUPLICATE_DISTANCE, EPSILON};
use glam::DVec2;

/// True for non-negative quantities (squared lengths, radii) too small to use.
#[inline]
pub fn nearly_zero(x: f64) -> bool {
    x < EPSILON
}

/// True when `x` is negative beyond float noise.
#[inline]
pub fn below_negative_tolerance(x: f64) -> bool {
    x < -EPSILON
}

/// True when `x` is large enough to count as a real, positive quantity.
#[inline]
pub fn exceeds_tolerance(x: f64) -> bool {
    x > EPSILON
}

/// `t ∈ [-EPSILON, 1 + EPSILON]`, i.e. on the segment including its endpoints.
#[inline]
pub fn within_unit_range_inclusive(t: f64) -> bool {
    t >= -EPSILON && t <= 1.0 + EPSILON
}

#[inline]
pub fn coincident(a: DVec2, b: DVec2) -> bool {
    a.distance(b) < DUPLICATE_DISTANCE
}
