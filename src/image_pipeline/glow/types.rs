use image::Rgb;

/// A glowing circle composited onto the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlowAccent {
    /// Centre in canvas pixels
    pub center: (i32, i32),
    /// Radius of the inner halo; the outer halo is 1.5x, the ring 0.8x
    pub radius: u32,
    pub color: Rgb<u8>,
}
