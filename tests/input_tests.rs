// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::*;
use intersect_core::{
    client_to_ndc, ndc_to_canvas, InputEvent, InteractionSession, PointerButton, Transition,
};

fn assert_near(actual: DVec2, expected: DVec2) {
    assert!(
        actual.distance(expected) < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn client_to_ndc_maps_canvas_corners() {
    // 700x700 canvas placed at (10, 20) on the page
    let map = |x: f64, y: f64| client_to_ndc(x, y, 10.0, 20.0, 700.0, 700.0);
    assert_near(map(10.0, 20.0), DVec2::new(-1.0, 1.0));
    assert_near(map(710.0, 720.0), DVec2::new(1.0, -1.0));
    assert_near(map(360.0, 370.0), DVec2::ZERO);
    assert_near(map(535.0, 370.0), DVec2::new(0.5, 0.0));
}

#[test]
fn client_to_ndc_handles_non_square_and_empty_rects() {
    assert_near(
        client_to_ndc(200.0, 50.0, 0.0, 0.0, 400.0, 100.0),
        DVec2::ZERO,
    );
    assert_eq!(client_to_ndc(5.0, 5.0, 0.0, 0.0, 0.0, 100.0), DVec2::ZERO);
    assert_eq!(client_to_ndc(5.0, 5.0, 0.0, 0.0, 100.0, 0.0), DVec2::ZERO);
}

#[test]
fn ndc_to_canvas_inverts_client_mapping() {
    for (x, y) in [(0.0, 0.0), (123.0, 456.0), (699.0, 1.0), (350.0, 700.0)] {
        let ndc = client_to_ndc(x, y, 0.0, 0.0, 700.0, 700.0);
        assert_near(ndc_to_canvas(ndc, 700.0, 700.0), DVec2::new(x, y));
    }
}

#[test]
fn input_event_maps_kinds_and_buttons() {
    let p = DVec2::new(0.25, -0.5);
    assert_eq!(
        input_event(PointerKind::Down, 0, p),
        InputEvent::Press {
            button: PointerButton::Left,
            point: p
        }
    );
    assert_eq!(
        input_event(PointerKind::Down, 2, p),
        InputEvent::Press {
            button: PointerButton::Other(2),
            point: p
        }
    );
    assert_eq!(
        input_event(PointerKind::Move, 0, p),
        InputEvent::Move { point: p }
    );
    assert_eq!(
        input_event(PointerKind::Up, 1, p),
        InputEvent::Release {
            button: PointerButton::Other(1)
        }
    );
}

#[test]
fn ignored_presses_leave_the_pointer_to_the_browser() {
    let mut s = InteractionSession::new();
    let p = DVec2::new(0.1, 0.1);

    // right button
    let t = s.handle(input_event(PointerKind::Down, 2, p));
    assert_eq!(t, Transition::Ignored);
    assert!(!claims_pointer(PointerKind::Down, t));

    // accepted press
    let t = s.handle(input_event(PointerKind::Down, 0, p));
    assert!(claims_pointer(PointerKind::Down, t));

    // second press mid-drag
    let t = s.handle(input_event(PointerKind::Down, 0, DVec2::new(0.5, 0.5)));
    assert_eq!(t, Transition::Ignored);
    assert!(!claims_pointer(PointerKind::Down, t));

    // moves never claim, releases claim only when they end a drag
    let t = s.handle(input_event(PointerKind::Move, 0, DVec2::new(0.4, 0.1)));
    assert!(!claims_pointer(PointerKind::Move, t));
    let t = s.handle(input_event(PointerKind::Up, 0, p));
    assert_eq!(t, Transition::CircleCommitted);
    assert!(claims_pointer(PointerKind::Up, t));
    let t = s.handle(input_event(PointerKind::Up, 0, p));
    assert!(!claims_pointer(PointerKind::Up, t));
}
