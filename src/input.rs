use glam::DVec2;
use intersect_core::{client_to_ndc, InputEvent, PointerButton, Transition};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Pointer position over the canvas in NDC, using the on-screen rectangle so
/// CSS scaling of the canvas does not skew the mapping.
#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_ndc(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    )
}

/// Translate a raw pointer notification into a session event.
#[inline]
pub fn input_event(kind: PointerKind, button_code: i16, point: DVec2) -> InputEvent {
    let button = PointerButton::from_dom(button_code);
    match kind {
        PointerKind::Down => InputEvent::Press { button, point },
        PointerKind::Move => InputEvent::Move { point },
        PointerKind::Up => InputEvent::Release { button },
    }
}

/// Whether the page should claim the pointer (capture + default suppression)
/// after the session reacted to it. Ignored presses are left to the browser.
#[inline]
pub fn claims_pointer(kind: PointerKind, transition: Transition) -> bool {
    kind != PointerKind::Move && transition.needs_redraw()
}
