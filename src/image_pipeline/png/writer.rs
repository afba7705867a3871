use std::io::Write;
use image::RgbaImage;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::types::GeneratorConfig;

pub trait ImageWriter {
    fn write_png(&self, image: &RgbaImage, output: &mut dyn Write, config: &GeneratorConfig) -> Result<()>;
}
