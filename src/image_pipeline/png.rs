//! PNG writing module
//!
//! Encodes rendered placeholders as RGBA PNG files.

mod writer;
mod standard_png_writer;
pub mod types;

pub use writer::ImageWriter;
pub use standard_png_writer::StandardPngWriter;
pub use types::PngCompression;
