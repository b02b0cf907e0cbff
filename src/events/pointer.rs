use crate::input::{self, PointerKind};
use crate::overlay;
use crate::render::Display;
use intersect_core::{InteractionSession, StatusText, Transition};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<InteractionSession>>,
    pub display: Rc<Display>,
    pub info: Option<web::Element>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

/// Redraw the canvas and rewrite the status text from the current session.
pub fn refresh(w: &InputWiring) {
    let session = w.session.borrow();
    if let Err(e) = w.display.draw(&session) {
        log::warn!("[render] draw failed: {:?}", e);
    }
    if let Some(info) = &w.info {
        overlay::show_status(info, &StatusText::from_session(&session));
    }
}

fn dispatch(w: &InputWiring, kind: PointerKind, ev: &web::PointerEvent) -> Transition {
    let point = input::pointer_ndc(ev, &w.canvas);
    let event = input::input_event(kind, ev.button(), point);
    let transition = w.session.borrow_mut().handle(event);
    if transition.needs_redraw() {
        log::debug!("[pointer] {:?} -> {:?}", kind, transition);
        refresh(w);
    }
    transition
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let transition = dispatch(&w, PointerKind::Down, &ev);
        if input::claims_pointer(PointerKind::Down, transition) {
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.session.borrow().is_dragging() {
            return;
        }
        dispatch(&w, PointerKind::Move, &ev);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let transition = dispatch(&w, PointerKind::Up, &ev);
        if input::claims_pointer(PointerKind::Up, transition) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
