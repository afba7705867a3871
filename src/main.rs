use anyhow::Context;
use placeholder_gen_rs::image_pipeline::{default_manifest, GeneratorConfig, PlaceholderPipeline};
use placeholder_gen_rs::logger;

use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Generating placeholder images...");

    let config = GeneratorConfig::builder()
        .apply_env()
        .context("invalid PLACEHOLDER_* environment")?
        .build();
    let pipeline = PlaceholderPipeline::new(config);

    info!("Output directory: {}", pipeline.config().output_dir.display());
    info!(
        "Label font: {}",
        if pipeline.uses_bitmap_font() {
            "built-in bitmap"
        } else {
            "outline"
        }
    );

    let written = pipeline
        .generate_all(&default_manifest())
        .context("placeholder generation failed")?;

    info!("Done! {} files written", written.len());
    Ok(())
}
