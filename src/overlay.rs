use intersect_core::StatusText;
use web_sys as web;

/// Replace the status element's text with the current readout.
#[inline]
pub fn show_status(info: &web::Element, status: &StatusText) {
    info.set_text_content(Some(&status.to_string()));
}
