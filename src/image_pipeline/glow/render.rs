use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};
use imageproc::filter::gaussian_blur_f32;
use tracing::{debug, trace};

use crate::image_pipeline::canvas::stamp_mask;
use crate::image_pipeline::glow::types::GlowAccent;

const OUTER_RADIUS_SCALE: f32 = 1.5;
const OUTER_ALPHA: u8 = 50;
const INNER_ALPHA: u8 = 100;
const RING_RADIUS_SCALE: f32 = 0.8;
const RING_ALPHA: u8 = 150;
const RING_WIDTH: i32 = 2;
const RING_COLOR: [u8; 3] = [255, 255, 255];

/// Blurs with sigma of at least twice this run on a downscaled mask
const BLUR_DOWNSCALE_SIGMA: f32 = 4.0;

fn blur_downscale_factor(sigma: f32) -> u32 {
    (sigma / BLUR_DOWNSCALE_SIGMA).floor().max(1.0) as u32
}

/// Coverage mask of a filled disc, blurred with `sigma` (0 = sharp).
///
/// Returns the mask and the offset of the disc centre inside it. The mask is
/// padded so the blur tail is not cut off.
fn disc_mask(radius: i32, sigma: f32) -> (GrayImage, i32) {
    let margin = (3.0 * sigma).ceil() as i32 + 2;
    let half = radius + margin;
    let side = (2 * half + 1) as u32;

    if sigma <= 0.0 {
        let mut mask = GrayImage::new(side, side);
        draw_filled_circle_mut(&mut mask, (half, half), radius, Luma([255]));
        return (mask, half);
    }

    let factor = blur_downscale_factor(sigma);
    if factor == 1 {
        let mut mask = GrayImage::new(side, side);
        draw_filled_circle_mut(&mut mask, (half, half), radius, Luma([255]));
        return (gaussian_blur_f32(&mask, sigma), half);
    }

    let small_side = side.div_ceil(factor);
    let small_half = (small_side / 2) as i32;
    let small_radius = (radius as f32 / factor as f32).round() as i32;

    let mut small = GrayImage::new(small_side, small_side);
    draw_filled_circle_mut(&mut small, (small_half, small_half), small_radius, Luma([255]));
    let blurred = gaussian_blur_f32(&small, sigma / factor as f32);
    trace!(sigma, factor, side, "Upscaling downsampled glow mask");

    (imageops::resize(&blurred, side, side, FilterType::Triangle), half)
}

fn ring_mask(radius: i32) -> (GrayImage, i32) {
    let half = radius + 2;
    let side = (2 * half + 1) as u32;

    let mut mask = GrayImage::new(side, side);
    // outline grows inwards like a stroked ellipse
    for inset in 0..RING_WIDTH.min(radius + 1) {
        draw_hollow_circle_mut(&mut mask, (half, half), radius - inset, Luma([255]));
    }
    (mask, half)
}

fn stamp_centered(canvas: &mut RgbaImage, mask: &GrayImage, half: i32, center: (i32, i32), color: Rgba<u8>) {
    stamp_mask(canvas, mask, center.0 - half, center.1 - half, color);
}

/// Composites an outer halo, an inner halo and a thin white ring for `accent`.
pub fn render_glow(canvas: &mut RgbaImage, accent: &GlowAccent) {
    if accent.radius == 0 {
        debug!(center = ?accent.center, "Skipping zero-radius glow");
        return;
    }

    let radius = accent.radius as f32;
    let [r, g, b] = accent.color.0;

    let (outer, half) = disc_mask((radius * OUTER_RADIUS_SCALE).round() as i32, radius / 2.0);
    stamp_centered(canvas, &outer, half, accent.center, Rgba([r, g, b, OUTER_ALPHA]));

    let (inner, half) = disc_mask(accent.radius as i32, radius / 4.0);
    stamp_centered(canvas, &inner, half, accent.center, Rgba([r, g, b, INNER_ALPHA]));

    let (ring, half) = ring_mask((radius * RING_RADIUS_SCALE).round() as i32);
    let [wr, wg, wb] = RING_COLOR;
    stamp_centered(canvas, &ring, half, accent.center, Rgba([wr, wg, wb, RING_ALPHA]));
}
