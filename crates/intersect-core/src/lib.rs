pub mod constants;
pub mod geometry;
pub mod ndc;
pub mod session;
pub mod status;
pub mod tolerance;

pub use constants::*;
pub use geometry::*;
pub use ndc::*;
pub use session::*;
pub use status::*;
