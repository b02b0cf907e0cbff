// Numeric policy shared by the geometry engine and the interaction session.

// Tolerance
pub const EPSILON: f64 = 1e-6; // single tolerance for every float comparison
pub const DUPLICATE_DISTANCE: f64 = EPSILON * 10.0; // points closer than this collapse into one

// Display tessellation
pub const CIRCLE_OUTLINE_SEGMENTS: usize = 100; // line pieces used to draw a circle
