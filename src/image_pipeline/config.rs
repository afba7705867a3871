//! Generator configuration module
//!
//! Output location, colours, fonts and the fixed asset manifest.

pub mod manifest;
pub mod types;

pub use manifest::{default_manifest, AssetKind, AssetSpec};
pub use types::{FontConfig, GeneratorConfig, GeneratorConfigBuilder, Palette};
