//! Alpha compositing helpers

use image::imageops;
use image::{GrayImage, Rgba, RgbaImage};

/// Composites a layer of the same size onto `base`.
pub fn composite_layer(base: &mut RgbaImage, layer: &RgbaImage) {
    debug_assert_eq!(base.dimensions(), layer.dimensions());
    imageops::overlay(base, layer, 0, 0);
}

/// Blends `color` onto `base` through a coverage mask placed at `(x, y)`.
///
/// Each mask value scales the colour's own alpha. The offset may be negative;
/// whatever falls outside `base` is clipped.
pub fn stamp_mask(base: &mut RgbaImage, mask: &GrayImage, x: i32, y: i32, color: Rgba<u8>) {
    let [r, g, b, a] = color.0;
    let tinted = RgbaImage::from_fn(mask.width(), mask.height(), |mx, my| {
        let coverage = mask.get_pixel(mx, my)[0] as u16;
        Rgba([r, g, b, ((a as u16 * coverage + 127) / 255) as u8])
    });
    imageops::overlay(base, &tinted, x as i64, y as i64);
}

/// Pins every pixel of an opaque canvas back to alpha 255.
///
/// Partial-alpha blends truncate the combined alpha, so a canvas that started
/// opaque can end up at 254 after compositing.
pub fn flatten_alpha(canvas: &mut RgbaImage) {
    for pixel in canvas.pixels_mut() {
        pixel[3] = u8::MAX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    const SLATE: Rgba<u8> = Rgba([15, 23, 42, 255]);

    #[test]
    fn test_opaque_source_replaces() {
        let mut base = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let layer = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 255]));
        composite_layer(&mut base, &layer);
        assert_eq!(base.get_pixel(1, 1), &Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_transparent_source_is_noop() {
        let mut base = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let layer = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0]));
        composite_layer(&mut base, &layer);
        assert_eq!(base.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_half_alpha_mixes() {
        let mut base = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let layer = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
        composite_layer(&mut base, &layer);
        let px = base.get_pixel(0, 0);
        assert!(px[3] >= 254);
        assert!((126..=130).contains(&px[0]));
    }

    #[test]
    fn test_composite_matches_source_over() {
        // src-over on an opaque base: out = src * a + dst * (1 - a)
        for alpha in (0..=255u16).step_by(17) {
            for value in [0u8, 90, 200, 255] {
                let mut base = RgbaImage::from_pixel(1, 1, SLATE);
                let layer = RgbaImage::from_pixel(1, 1, Rgba([value, value, value, alpha as u8]));
                composite_layer(&mut base, &layer);

                let a = alpha as f32 / 255.0;
                let expected = value as f32 * a + SLATE[2] as f32 * (1.0 - a);
                let got = base.get_pixel(0, 0)[2] as f32;
                assert!((got - expected).abs() <= 1.0, "alpha {} value {}: {} vs {}", alpha, value, got, expected);
            }
        }
    }

    #[test]
    fn test_stamp_mask_clips_negative_offset() {
        let mut base = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let mask = GrayImage::from_pixel(3, 3, Luma([255]));
        stamp_mask(&mut base, &mask, -2, -2, Rgba([255, 0, 0, 255]));

        assert_eq!(base.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(base.get_pixel(1, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(base.get_pixel(0, 1), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_stamp_mask_clips_past_far_edge() {
        let mut base = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let mask = GrayImage::from_pixel(3, 3, Luma([255]));
        stamp_mask(&mut base, &mask, 3, 3, Rgba([0, 255, 0, 255]));

        assert_eq!(base.get_pixel(3, 3), &Rgba([0, 255, 0, 255]));
        assert_eq!(base.get_pixel(2, 3), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_stamp_mask_scales_by_coverage() {
        let mut base = RgbaImage::from_pixel(3, 1, Rgba([0, 0, 0, 255]));
        let mut mask = GrayImage::new(3, 1);
        mask.put_pixel(0, 0, Luma([255]));
        mask.put_pixel(1, 0, Luma([51]));
        stamp_mask(&mut base, &mask, 0, 0, Rgba([255, 255, 255, 255]));

        assert_eq!(base.get_pixel(0, 0)[0], 255);
        assert!((50..=51).contains(&base.get_pixel(1, 0)[0]));
        assert_eq!(base.get_pixel(2, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_flatten_alpha_restores_opacity() {
        let mut base = RgbaImage::from_pixel(8, 8, SLATE);
        let mask = GrayImage::from_pixel(8, 8, Luma([97]));
        stamp_mask(&mut base, &mask, 0, 0, Rgba([59, 130, 246, 150]));
        flatten_alpha(&mut base);

        assert!(base.pixels().all(|p| p[3] == 255));
        assert!(base.get_pixel(4, 4)[2] > SLATE[2]);
    }
}
