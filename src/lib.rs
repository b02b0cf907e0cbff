#![cfg(target_arch = "wasm32")]
use intersect_core::InteractionSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("intersect-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ELEMENT_ID)?;
    dom::set_square_backing_size(&canvas, constants::CANVAS_SIZE);

    let display = Rc::new(render::Display::new(&canvas)?);
    let info = document.get_element_by_id(constants::INFO_ELEMENT_ID);
    if info.is_none() {
        log::warn!("missing #{}; status text disabled", constants::INFO_ELEMENT_ID);
    }

    let wiring = events::InputWiring {
        canvas,
        session: Rc::new(RefCell::new(InteractionSession::new())),
        display,
        info,
    };
    events::refresh(&wiring);
    events::wire_input_handlers(wiring);
    log::info!("ready: drag to draw a circle, then drag to draw a segment");
    Ok(())
}
