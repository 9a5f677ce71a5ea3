//! Decorative hero background: floating, parallax construction shapes.

pub mod scene;
pub mod svg;

pub use scene::{Pointer, Scene, ShapeKind, Viewport};
pub use svg::render_svg;
