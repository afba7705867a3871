//! Text module
//!
//! Font resolution with a bitmap fallback, and the centred shadowed label.

mod bitmap_font;
mod font;
mod label;

pub use bitmap_font::BitmapFont;
pub use font::{FontResolver, LabelFont, LINE_SPACING};
pub use label::{draw_label, SHADOW_COLOR, SHADOW_OFFSET, TEXT_COLOR};
