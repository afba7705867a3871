//! Glow module
//!
//! Placement and rendering of the blurred circular light accents.

mod accents;
mod render;
pub mod types;

pub use accents::{plan_accents, CENTER_GLOW_RADIUS, RANDOM_ACCENT_COUNT, RANDOM_ACCENT_RADIUS};
pub use render::render_glow;
pub use types::GlowAccent;
