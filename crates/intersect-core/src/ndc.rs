use glam::DVec2;

/// Map a client-space pointer position over a canvas rectangle into NDC
/// (origin at the center, y up). A zero-sized rectangle maps to the origin.
#[inline]
pub fn client_to_ndc(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    width: f64,
    height: f64,
) -> DVec2 {
    if width <= 0.0 || height <= 0.0 {
        return DVec2::ZERO;
    }
    let x = (client_x - rect_left) / width * 2.0 - 1.0;
    let y = 1.0 - (client_y - rect_top) / height * 2.0;
    DVec2::new(x, y)
}

/// Inverse of [`client_to_ndc`] onto a canvas of `width` x `height` pixels.
#[inline]
pub fn ndc_to_canvas(point: DVec2, width: f64, height: f64) -> DVec2 {
    DVec2::new((point.x + 1.0) * 0.5 * width, (1.0 - point.y) * 0.5 * height)
}
