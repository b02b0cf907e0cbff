use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", element_id, e)))
}

#[inline]
pub fn set_square_backing_size(canvas: &web::HtmlCanvasElement, size: u32) {
    canvas.set_width(size.max(1));
    canvas.set_height(size.max(1));
}
