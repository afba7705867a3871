//! Canvas module
//!
//! Background gradient, grid overlay and the alpha compositing they share
//! with the glow and text stages.

mod compose;
mod gradient;
mod grid;

pub use compose::{composite_layer, flatten_alpha, stamp_mask};
pub use gradient::radial_gradient;
pub use grid::{grid_overlay, grid_step, MAJOR_LINE_ALPHA, MINOR_LINE_ALPHA};
