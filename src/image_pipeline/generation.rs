//! Placeholder generation module
//!
//! Runs the fixed recipe (gradient, grid, glows, label) and writes the result.

mod placeholder;


pub use placeholder::PlaceholderPipeline;
