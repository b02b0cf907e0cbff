//! Circle / line-segment intersection.
//!
//! The segment is parametrized as `P(t) = p1 + t * (p2 - p1)` with `t` in
//! `[0, 1]` and substituted into `|P(t) - center|^2 = r^2`, giving a quadratic
//! in `t`. Roots on the segment (within tolerance) become intersection points.
//!
//! Everything here is pure: no logging on the hot path, no mutable state.

use crate::tolerance::{
    below_negative_tolerance, coincident, nearly_zero, within_unit_range_inclusive,
};
use glam::DVec2;
use smallvec::SmallVec;
use std::f64::consts::TAU;
use thiserror::Error;

/// Zero, one (tangent) or two intersection points, ordered by ascending `t`.
pub type Intersections = SmallVec<[DVec2; 2]>;

/// Circle in NDC. A `None` center means the circle has not been defined yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: Option<DVec2>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center: Some(center),
            radius,
        }
    }

    /// Intersect with a segment; see [`intersect`] for the empty-result policy.
    pub fn intersect_segment(&self, segment: &Segment) -> Intersections {
        intersect(self.center, self.radius, segment.p1, segment.p2)
    }
}

/// Line segment in NDC. Endpoints stay `None` until defined by input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    pub p1: Option<DVec2>,
    pub p2: Option<DVec2>,
}

impl Segment {
    pub fn new(p1: DVec2, p2: DVec2) -> Self {
        Self {
            p1: Some(p1),
            p2: Some(p2),
        }
    }

    /// Both endpoints, once both are defined.
    pub fn endpoints(&self) -> Option<(DVec2, DVec2)> {
        self.p1.zip(self.p2)
    }
}

/// Why an input could not produce a meaningful intersection query.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvalidInput {
    #[error("circle center is not defined")]
    MissingCenter,
    #[error("segment endpoint is not defined")]
    MissingEndpoint,
    #[error("input contains a non-finite coordinate or radius")]
    NonFinite,
    #[error("circle radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("segment endpoints coincide")]
    DegenerateSegment,
}

/// Intersection points of a circle and a segment.
///
/// Unusable inputs (missing shapes, non-positive radius, degenerate segment)
/// and geometric misses all produce an empty result. Use [`try_intersect`]
/// to tell them apart.
pub fn intersect(
    center: Option<DVec2>,
    radius: f64,
    p1: Option<DVec2>,
    p2: Option<DVec2>,
) -> Intersections {
    try_intersect(center, radius, p1, p2).unwrap_or_default()
}

/// Like [`intersect`], but reports invalid inputs instead of folding them into
/// the empty result. `Ok` with an empty vector means a genuine miss.
pub fn try_intersect(
    center: Option<DVec2>,
    radius: f64,
    p1: Option<DVec2>,
    p2: Option<DVec2>,
) -> Result<Intersections, InvalidInput> {
    let center = center.ok_or(InvalidInput::MissingCenter)?;
    let (p1, p2) = p1.zip(p2).ok_or(InvalidInput::MissingEndpoint)?;

    if !(center.is_finite() && p1.is_finite() && p2.is_finite() && radius.is_finite()) {
        return Err(InvalidInput::NonFinite);
    }
    if radius <= 0.0 {
        return Err(InvalidInput::NonPositiveRadius(radius));
    }

    let d = p2 - p1;
    let e = p1 - center;

    let a = d.length_squared();
    if nearly_zero(a) {
        return Err(InvalidInput::DegenerateSegment);
    }
    let b = 2.0 * e.dot(d);
    let c = e.length_squared() - radius * radius;

    Ok(segment_roots(p1, d, a, b, c))
}

fn segment_roots(p1: DVec2, d: DVec2, a: f64, b: f64, c: f64) -> Intersections {
    let mut out = Intersections::new();

    let discriminant = b * b - 4.0 * a * c;
    if below_negative_tolerance(discriminant) {
        return out;
    }
    // tangency can land slightly below zero
    let sqrt_disc = discriminant.max(0.0).sqrt();

    for t in [(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)] {
        if !within_unit_range_inclusive(t) {
            continue;
        }
        let p = p1 + d * t;
        if !out.iter().any(|q| coincident(*q, p)) {
            out.push(p);
        }
    }
    out
}

/// Closed polyline approximating a circle: `segments + 1` vertices, the last
/// repeating the first.
pub fn circle_outline(center: DVec2, radius: f64, segments: usize) -> Vec<DVec2> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = i as f64 * TAU / segments as f64;
            center + DVec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
