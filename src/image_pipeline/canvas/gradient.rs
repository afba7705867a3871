use image::{Rgb, Rgba, RgbaImage};

/// Radial gradient from `start` at the centre to `end` at the corners.
///
/// The blend factor is the pixel's distance to the centre divided by the
/// centre-to-corner distance, quantised to 0..=255.
pub fn radial_gradient(width: u32, height: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbaImage {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let max_dist = center_x.hypot(center_y);

    RgbaImage::from_fn(width, height, |x, y| {
        let dist = (x as f64 - center_x).hypot(y as f64 - center_y);
        let ratio = if max_dist > 0.0 { dist / max_dist } else { 0.0 };
        let mask = (255.0 * ratio).clamp(0.0, 255.0) as u32;

        let mix = |from: u8, to: u8| -> u8 {
            ((to as u32 * mask + from as u32 * (255 - mask) + 127) / 255) as u8
        };
        Rgba([
            mix(start[0], end[0]),
            mix(start[1], end[1]),
            mix(start[2], end[2]),
            255,
        ])
    })
}
