//! PNG encoding options

/// PNG compression presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    /// Fast deflate (larger files)
    Fast,
    /// Default deflate level
    #[default]
    Balanced,
    /// Best deflate compression (slowest)
    Best,
}
