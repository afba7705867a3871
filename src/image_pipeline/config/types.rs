//! Generator configuration types

use std::path::PathBuf;

use image::Rgb;

use crate::image_pipeline::common::error::{GenerationError, Result};
use crate::image_pipeline::png::types::PngCompression;

pub const ENV_OUTPUT_DIR: &str = "PLACEHOLDER_OUTPUT_DIR";
pub const ENV_FONT: &str = "PLACEHOLDER_FONT";
pub const ENV_SEED: &str = "PLACEHOLDER_SEED";

/// Brand colours used by every placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Electric blue, grid lines and main glow
    pub brand: Rgb<u8>,
    /// Darker blue for the secondary accents
    pub brand_dark: Rgb<u8>,
    /// Gradient colour at the canvas centre
    pub background_start: Rgb<u8>,
    /// Gradient colour towards the corners
    pub background_end: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            brand: Rgb([59, 130, 246]),
            brand_dark: Rgb([30, 64, 175]),
            background_start: Rgb([15, 23, 42]),
            background_end: Rgb([0, 0, 0]),
        }
    }
}

/// Where label fonts come from
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Explicit TrueType/OpenType file, tried first
    pub path: Option<PathBuf>,
    /// Family name looked up among system fonts
    pub family: Option<String>,
    /// Whether to query installed system fonts at all
    pub use_system_fonts: bool,
    /// Pixel size for logo labels
    pub logo_size: f32,
    /// Pixel size for every other label
    pub label_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            family: Some("Arial".to_string()),
            use_system_fonts: true,
            logo_size: 60.0,
            label_size: 40.0,
        }
    }
}

/// Configuration for placeholder generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the PNG files are written to (created if missing)
    pub output_dir: PathBuf,
    pub palette: Palette,
    pub font: FontConfig,
    pub compression: PngCompression,
    /// Fixed RNG seed for reproducible accents; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Whether to reject out-of-range dimensions before rendering
    pub validate_dimensions: bool,
    /// Upper bound for either side when validation is enabled
    pub max_dimension: Option<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("images"),
            palette: Palette::default(),
            font: FontConfig::default(),
            compression: PngCompression::Balanced,
            seed: None,
            validate_dimensions: true,
            max_dimension: Some(8192),
        }
    }
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

/// Builder for GeneratorConfig
#[derive(Default)]
pub struct GeneratorConfigBuilder {
    output_dir: Option<PathBuf>,
    palette: Option<Palette>,
    font: Option<FontConfig>,
    font_path: Option<PathBuf>,
    compression: Option<PngCompression>,
    seed: Option<Option<u64>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl GeneratorConfigBuilder {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn font(mut self, font: FontConfig) -> Self {
        self.font = Some(font);
        self
    }

    /// Overrides only the font file, keeping the rest of the font settings
    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    /// Applies `PLACEHOLDER_*` overrides from the process environment.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides using `lookup` as the environment.
    ///
    /// Empty values are ignored. A seed that is not a `u64` is an error.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self = self.output_dir(dir);
        }
        if let Some(path) = lookup(ENV_FONT) {
            self = self.font_path(path);
        }
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw.trim().parse::<u64>().map_err(|e| {
                GenerationError::InvalidConfig(format!("{}={:?}: {}", ENV_SEED, raw, e))
            })?;
            self = self.seed(Some(seed));
        }
        Ok(self)
    }

    pub fn build(self) -> GeneratorConfig {
        let default = GeneratorConfig::default();
        let mut font = self.font.unwrap_or(default.font);
        if let Some(path) = self.font_path {
            font.path = Some(path);
        }
        GeneratorConfig {
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            palette: self.palette.unwrap_or(default.palette),
            font,
            compression: self.compression.unwrap_or(default.compression),
            seed: self.seed.unwrap_or(default.seed),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
