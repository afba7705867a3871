use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use ab_glyph::FontArc;
use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};

use crate::image_pipeline::{
    canvas::{composite_layer, flatten_alpha, grid_overlay, grid_step, radial_gradient},
    common::error::{GenerationError, Result},
    config::{AssetSpec, GeneratorConfig},
    glow::{plan_accents, render_glow},
    png::{ImageWriter, StandardPngWriter},
    text::{draw_label, FontResolver, LabelFont},
};

/// Renders placeholder images and hands them to an [`ImageWriter`].
pub struct PlaceholderPipeline<W: ImageWriter> {
    writer: W,
    config: GeneratorConfig,
    logo_font: LabelFont,
    label_font: LabelFont,
}

impl PlaceholderPipeline<StandardPngWriter> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_custom(StandardPngWriter, config)
    }
}

impl<W: ImageWriter> PlaceholderPipeline<W> {
    /// Fonts are resolved here, once, and reused for every asset.
    pub fn with_custom(writer: W, config: GeneratorConfig) -> Self {
        let face: Option<FontArc> = FontResolver::new(&config.font).resolve();
        let logo_font = LabelFont::new(face.as_ref(), config.font.logo_size);
        let label_font = LabelFont::new(face.as_ref(), config.font.label_size);

        Self {
            writer,
            config,
            logo_font,
            label_font,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        // nothing to encode for an empty canvas, whatever the settings
        if width == 0 || height == 0 {
            return Err(GenerationError::InvalidDimensions(width, height));
        }

        if !self.config.validate_dimensions {
            return Ok(());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(GenerationError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    fn font_for(&self, asset: &AssetSpec) -> &LabelFont {
        if asset.is_logo() {
            &self.logo_font
        } else {
            &self.label_font
        }
    }

    /// Builds the image for `asset` in memory.
    #[instrument(skip(self, asset, rng), fields(file = %asset.file_name, width = asset.width, height = asset.height))]
    pub fn render<R: Rng + ?Sized>(&self, asset: &AssetSpec, rng: &mut R) -> Result<RgbaImage> {
        let (width, height) = (asset.width, asset.height);
        self.validate_dimensions(width, height)?;
        let palette = &self.config.palette;

        let mut canvas = {
            let _span = tracing::info_span!("gradient").entered();
            radial_gradient(width, height, palette.background_start, palette.background_end)
        };

        {
            let step = grid_step(width);
            let _span = tracing::info_span!("grid", step).entered();
            let overlay = grid_overlay(width, height, step, palette.brand);
            composite_layer(&mut canvas, &overlay);
        }

        {
            let accents = plan_accents(asset.kind, width, height, palette, rng);
            let _span = tracing::info_span!("glow", accents = accents.len()).entered();
            for accent in &accents {
                render_glow(&mut canvas, accent);
            }
        }

        {
            let _span = tracing::info_span!("label").entered();
            draw_label(&mut canvas, self.font_for(asset), &asset.label);
        }

        flatten_alpha(&mut canvas);
        Ok(canvas)
    }

    fn encode(&self, image: &RgbaImage, output: &mut dyn Write) -> Result<()> {
        let _span = tracing::info_span!("encode_png").entered();
        self.writer.write_png(image, output, &self.config)
    }

    /// Renders `asset` and encodes it into `output`.
    pub fn generate<R: Rng + ?Sized>(&self, asset: &AssetSpec, output: &mut dyn Write, rng: &mut R) -> Result<()> {
        let image = self.render(asset, rng)?;
        self.encode(&image, output)
    }

    /// Writes `asset` to the output directory, creating it if needed.
    ///
    /// The image is rendered before the file is opened, so a failed render
    /// leaves no partial file behind. An existing file is overwritten.
    #[instrument(skip(self, asset, rng), fields(file = %asset.file_name))]
    pub fn generate_file<R: Rng + ?Sized>(&self, asset: &AssetSpec, rng: &mut R) -> Result<PathBuf> {
        let image = self.render(asset, rng)?;

        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).map_err(|e| {
            GenerationError::OutputWriteError(format!("{}: {}", output_dir.display(), e))
        })?;

        let output_path = output_dir.join(&asset.file_name);
        let output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            File::create(&output_path).map_err(|e| {
                GenerationError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        let mut output = BufWriter::new(output_file);
        self.encode(&image, &mut output)?;
        output.flush()?;

        info!(
            path = %output_path.display(),
            width = asset.width,
            height = asset.height,
            "Generated placeholder"
        );
        Ok(output_path)
    }

    /// Generates every asset in order with one RNG, stopping at the first error.
    pub fn generate_all(&self, assets: &[AssetSpec]) -> Result<Vec<PathBuf>> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(count = assets.len(), output_dir = %self.config.output_dir.display(), "Generating placeholders");
        assets
            .iter()
            .map(|asset| self.generate_file(asset, &mut rng))
            .collect()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn uses_bitmap_font(&self) -> bool {
        self.label_font.is_bitmap()
    }
}
