use std::io::Write;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::debug;
use crate::image_pipeline::common::error::{Result, GenerationError};
use crate::image_pipeline::config::types::GeneratorConfig;
use crate::image_pipeline::png::types::PngCompression;
use crate::image_pipeline::png::writer::ImageWriter;

pub struct StandardPngWriter;

impl ImageWriter for StandardPngWriter {
    fn write_png(&self, image: &RgbaImage, output: &mut dyn Write, config: &GeneratorConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        let compression = match config.compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Balanced => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };

        let encoder = PngEncoder::new_with_quality(output, compression, FilterType::Adaptive);
        encoder
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| GenerationError::EncodeError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
