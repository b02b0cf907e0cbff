// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use intersect_core::{CIRCLE_OUTLINE_SEGMENTS, DUPLICATE_DISTANCE, EPSILON};

#[test]
#[allow(clippy::assertions_on_constants)]
fn tolerances_are_small_and_ordered() {
    assert!(EPSILON > 0.0 && EPSILON < 1e-3);
    // duplicates are merged over a wider radius than a single epsilon
    assert!(DUPLICATE_DISTANCE > EPSILON);
    assert!((DUPLICATE_DISTANCE - 10.0 * EPSILON).abs() < 1e-15);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drawing_constants_are_sane() {
    assert!(CANVAS_SIZE > 0);
    assert!(CIRCLE_OUTLINE_SEGMENTS >= 3);
    assert!(AXIS_LINE_WIDTH > 0.0);
    assert!(SHAPE_LINE_WIDTH >= AXIS_LINE_WIDTH);
    assert!(POINT_RADIUS_PX > SHAPE_LINE_WIDTH);
    assert!(!CANVAS_ELEMENT_ID.is_empty());
    assert!(!INFO_ELEMENT_ID.is_empty());
}

#[test]
fn palette_entries_are_distinct() {
    let colors = [
        BACKGROUND_COLOR,
        AXIS_Y_COLOR,
        AXIS_X_COLOR,
        CIRCLE_COLOR,
        SEGMENT_COLOR,
        POINT_COLOR,
    ];
    for (i, a) in colors.iter().enumerate() {
        assert!(a.starts_with("rgb("));
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
