use image::{Rgb, Rgba, RgbaImage};

/// Alpha of lines on the major (every fourth) grid coordinate
pub const MAJOR_LINE_ALPHA: u8 = 30;
/// Alpha of all other grid lines
pub const MINOR_LINE_ALPHA: u8 = 10;

const SMALL_CANVAS_STEP: u32 = 40;
const LARGE_CANVAS_STEP: u32 = 60;
const LARGE_CANVAS_MIN_WIDTH: u32 = 600;

/// Grid spacing for a canvas of the given width.
pub fn grid_step(width: u32) -> u32 {
    if width < LARGE_CANVAS_MIN_WIDTH {
        SMALL_CANVAS_STEP
    } else {
        LARGE_CANVAS_STEP
    }
}

fn line_alpha(coord: u32, step: u32) -> u8 {
    if coord % (step * 4) == 0 {
        MAJOR_LINE_ALPHA
    } else {
        MINOR_LINE_ALPHA
    }
}

/// Transparent layer holding 1px grid lines every `step` pixels.
///
/// Horizontal lines are drawn last and win at intersections.
pub fn grid_overlay(width: u32, height: u32, step: u32, color: Rgb<u8>) -> RgbaImage {
    let mut layer = RgbaImage::new(width, height);
    let step = step.max(1);
    let [r, g, b] = color.0;

    for x in (0..width).step_by(step as usize) {
        let px = Rgba([r, g, b, line_alpha(x, step)]);
        for y in 0..height {
            layer.put_pixel(x, y, px);
        }
    }

    for y in (0..height).step_by(step as usize) {
        let px = Rgba([r, g, b, line_alpha(y, step)]);
        for x in 0..width {
            layer.put_pixel(x, y, px);
        }
    }

    layer
}
