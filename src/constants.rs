// Page wiring and drawing constants for the web frontend.

// DOM
pub const CANVAS_ELEMENT_ID: &str = "gl-canvas";
pub const INFO_ELEMENT_ID: &str = "info";
pub const CANVAS_SIZE: u32 = 700; // backing store is square, in pixels

// Palette (CSS colors)
pub const BACKGROUND_COLOR: &str = "rgb(0, 0, 0)";
pub const AXIS_Y_COLOR: &str = "rgb(255, 0, 0)"; // vertical axis
pub const AXIS_X_COLOR: &str = "rgb(0, 255, 0)"; // horizontal axis
pub const CIRCLE_COLOR: &str = "rgb(153, 0, 204)";
pub const SEGMENT_COLOR: &str = "rgb(255, 255, 255)";
pub const POINT_COLOR: &str = "rgb(255, 255, 0)";

// Stroke sizing (canvas pixels)
pub const AXIS_LINE_WIDTH: f64 = 1.0;
pub const SHAPE_LINE_WIDTH: f64 = 2.0;
pub const POINT_RADIUS_PX: f64 = 5.0;
