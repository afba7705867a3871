use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::image_pipeline::canvas::stamp_mask;
use crate::image_pipeline::text::font::LabelFont;

pub const SHADOW_OFFSET: i32 = 2;
pub const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 180]);
pub const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Draws `text` centred on the canvas with a soft drop shadow.
pub fn draw_label(canvas: &mut RgbaImage, font: &LabelFont, text: &str) {
    if text.is_empty() {
        return;
    }

    let mask = font.render_mask(text);
    let x = (canvas.width() as i32 - mask.width() as i32) / 2;
    let y = (canvas.height() as i32 - mask.height() as i32) / 2;
    debug!(x, y, width = mask.width(), height = mask.height(), "Placing label");

    stamp_mask(canvas, &mask, x + SHADOW_OFFSET, y + SHADOW_OFFSET, SHADOW_COLOR);
    stamp_mask(canvas, &mask, x, y, TEXT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::config::FontConfig;
    use crate::image_pipeline::text::bitmap_font::BitmapFont;
    use crate::image_pipeline::text::font::FontResolver;

    const BG: Rgba<u8> = Rgba([30, 64, 175, 255]);

    #[test]
    fn test_label_changes_pixels() {
        let mut canvas = RgbaImage::from_pixel(200, 100, BG);
        draw_label(&mut canvas, &LabelFont::Bitmap(BitmapFont::new(2)), "Care Tech");

        assert!(canvas.pixels().any(|p| *p == TEXT_COLOR));
        assert!(canvas.pixels().all(|p| p[3] >= 254));
    }

    #[test]
    fn test_empty_label_is_noop() {
        let mut canvas = RgbaImage::from_pixel(50, 50, BG);
        draw_label(&mut canvas, &LabelFont::Bitmap(BitmapFont::new(2)), "");
        assert!(canvas.pixels().all(|p| *p == BG));
    }

    #[test]
    fn test_label_is_centered() {
        let font = LabelFont::Bitmap(BitmapFont::new(1));
        let mut canvas = RgbaImage::from_pixel(21, 21, BG);
        draw_label(&mut canvas, &font, "I");

        // 5x8 block at (8, 6); the bar of "I" is column 2 of the glyph
        assert_eq!(canvas.get_pixel(10, 6), &TEXT_COLOR);
        assert_eq!(canvas.get_pixel(10, 12), &TEXT_COLOR);
    }

    #[test]
    fn test_shadow_is_offset_and_darker() {
        let font = LabelFont::Bitmap(BitmapFont::new(1));
        let mut canvas = RgbaImage::from_pixel(21, 21, BG);
        draw_label(&mut canvas, &font, "I");

        // below the last row of the bar only the shadow lands
        let shadow = canvas.get_pixel(12, 13);
        assert!(shadow[2] < BG[2]);
    }

    /// Gaps between the white ink and each canvas edge: left, right, top, bottom.
    fn ink_margins(canvas: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
        let ink: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] > 128)
            .map(|(x, y, _)| (x, y))
            .collect();
        let min_x = ink.iter().map(|&(x, _)| x).min()?;
        let max_x = ink.iter().map(|&(x, _)| x).max()?;
        let min_y = ink.iter().map(|&(_, y)| y).min()?;
        let max_y = ink.iter().map(|&(_, y)| y).max()?;
        Some((
            min_x,
            canvas.width() - 1 - max_x,
            min_y,
            canvas.height() - 1 - max_y,
        ))
    }

    #[test]
    fn test_outline_label_is_centered() {
        let config = FontConfig::default();
        let Some(face) = FontResolver::new(&config).resolve() else {
            eprintln!("no system fonts installed, skipping");
            return;
        };

        for (text, size) in [("Care Tech", 60.0), ("Future of Health\nAutomation", 40.0)] {
            let font = LabelFont::new(Some(&face), size);
            let mut canvas = RgbaImage::from_pixel(800, 600, BG);
            draw_label(&mut canvas, &font, text);

            let (left, right, top, bottom) = ink_margins(&canvas).expect("label should leave ink");
            assert!(left.abs_diff(right) <= 12, "{:?}: left {} right {}", text, left, right);
            assert!(top.abs_diff(bottom) <= 16, "{:?}: top {} bottom {}", text, top, bottom);
        }
    }

    #[test]
    fn test_oversized_label_is_clipped() {
        let font = LabelFont::Bitmap(BitmapFont::new(6));
        let mut canvas = RgbaImage::from_pixel(40, 20, BG);
        draw_label(&mut canvas, &font, "Cashflow Analytics");
        assert_eq!(canvas.dimensions(), (40, 20));
    }
}
