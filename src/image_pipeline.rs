//! Placeholder image pipeline module
//!
//! Procedurally renders the website's placeholder artwork: a radial gradient,
//! a faint tech grid, glowing accents and a centred label, written as PNG.

pub mod canvas;
pub mod common;
pub mod config;
pub mod generation;
pub mod glow;
pub mod png;
pub mod text;

pub use common::{
    GenerationError,
    Result,
};

pub use config::{
    default_manifest,
    AssetKind,
    AssetSpec,
    FontConfig,
    GeneratorConfig,
    GeneratorConfigBuilder,
    Palette,
};

pub use png::{
    ImageWriter,
    PngCompression,
    StandardPngWriter,
};

pub use generation::PlaceholderPipeline;
