use std::fmt;
use std::path::Path;

use ab_glyph::{Font, FontArc, FontVec, PxScale, ScaleFont};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use image::{GrayImage, Luma};
use imageproc::drawing::{draw_text_mut, text_size};
use tracing::{debug, info, warn};

use crate::image_pipeline::common::error::{GenerationError, Result};
use crate::image_pipeline::config::FontConfig;
use crate::image_pipeline::text::bitmap_font::BitmapFont;

/// Gap between lines of a multi-line label
pub const LINE_SPACING: u32 = 4;

/// Common sans-serif families tried after the configured one
const FALLBACK_FAMILIES: [&str; 4] = ["Liberation Sans", "DejaVu Sans", "Helvetica", "Noto Sans"];

/// Font used to draw labels at one pixel size
#[derive(Clone)]
pub enum LabelFont {
    Outline { font: FontArc, scale: PxScale },
    Bitmap(BitmapFont),
}

impl fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelFont::Outline { scale, .. } => f.debug_struct("Outline").field("scale", &scale.y).finish(),
            LabelFont::Bitmap(bitmap) => f.debug_tuple("Bitmap").field(bitmap).finish(),
        }
    }
}

impl LabelFont {
    /// Outline font at `size` px when a face is available, bitmap otherwise.
    pub fn new(face: Option<&FontArc>, size: f32) -> Self {
        match face {
            Some(font) => LabelFont::Outline {
                font: font.clone(),
                scale: PxScale::from(size),
            },
            None => LabelFont::Bitmap(BitmapFont::for_pixel_size(size)),
        }
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, LabelFont::Bitmap(_))
    }

    fn line_height(&self) -> u32 {
        match self {
            LabelFont::Outline { font, scale } => font.as_scaled(*scale).height().ceil().max(1.0) as u32,
            LabelFont::Bitmap(bitmap) => bitmap.line_height(),
        }
    }

    fn line_width(&self, line: &str) -> u32 {
        match self {
            LabelFont::Outline { font, scale } => text_size(*scale, font, line).0,
            LabelFont::Bitmap(bitmap) => bitmap.line_width(line),
        }
    }

    /// Size of the text block; lines are split on `\n`.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let line_height = self.line_height();
        let (width, lines) = text
            .split('\n')
            .fold((0, 0u32), |(width, count), line| (width.max(self.line_width(line)), count + 1));
        let height = lines * line_height + lines.saturating_sub(1) * LINE_SPACING;
        (width, height)
    }

    /// Coverage mask of the text block, lines left-aligned.
    pub fn render_mask(&self, text: &str) -> GrayImage {
        let (width, height) = self.measure(text);
        let mut mask = GrayImage::new(width.max(1), height.max(1));
        let line_height = self.line_height();

        for (index, line) in text.split('\n').enumerate() {
            let y = index as u32 * (line_height + LINE_SPACING);
            match self {
                LabelFont::Outline { font, scale } => {
                    draw_text_mut(&mut mask, Luma([255]), 0, y as i32, *scale, font, line);
                }
                LabelFont::Bitmap(bitmap) => bitmap.draw_line(&mut mask, 0, y, line),
            }
        }
        mask
    }
}

/// Finds an outline font face according to a [`FontConfig`].
pub struct FontResolver<'a> {
    config: &'a FontConfig,
}

impl<'a> FontResolver<'a> {
    pub fn new(config: &'a FontConfig) -> Self {
        Self { config }
    }

    /// Configured file first, then system fonts. `None` means the bitmap font.
    pub fn resolve(&self) -> Option<FontArc> {
        if let Some(path) = &self.config.path {
            match load_font_file(path) {
                Ok(font) => {
                    info!(path = %path.display(), "Loaded label font");
                    return Some(font);
                }
                Err(e) => warn!("{}, trying fallbacks", e),
            }
        }

        if self.config.use_system_fonts {
            match self.load_system_font() {
                Ok(font) => return Some(font),
                Err(e) => debug!("{}", e),
            }
        }

        info!("No outline font available, using built-in bitmap font");
        None
    }

    fn load_system_font(&self) -> Result<FontArc> {
        let mut db = Database::new();
        db.load_system_fonts();
        debug!(faces = db.len(), "Loaded system font database");

        let mut families: Vec<Family<'_>> = Vec::new();
        if let Some(name) = &self.config.family {
            families.push(Family::Name(name));
        }
        families.extend(FALLBACK_FAMILIES.iter().map(|name| Family::Name(name)));
        families.push(Family::SansSerif);

        let query = Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };

        let id = db
            .query(&query)
            .ok_or_else(|| GenerationError::FontLoadError("no matching system font".to_string()))?;

        if let Some(face) = db.face(id) {
            info!(family = ?face.families.first().map(|(name, _)| name), "Using system font");
        }

        db.with_face_data(id, |data, index| FontVec::try_from_vec_and_index(data.to_vec(), index))
            .ok_or_else(|| GenerationError::FontLoadError("system font data unavailable".to_string()))?
            .map(FontArc::new)
            .map_err(|e| GenerationError::FontLoadError(e.to_string()))
    }
}

fn load_font_file(path: &Path) -> Result<FontArc> {
    let data = std::fs::read(path)
        .map_err(|e| GenerationError::FontLoadError(format!("{}: {}", path.display(), e)))?;
    FontArc::try_from_vec(data)
        .map_err(|e| GenerationError::FontLoadError(format!("{}: {}", path.display(), e)))
}
