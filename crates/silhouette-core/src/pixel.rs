use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Bytes per RGBA8 pixel in a row-major buffer.
pub const CHANNELS: usize = 4;

/// Uniform RGBA fill of a silhouette.
///
/// `a` is the maximum opacity: the written alpha is `a` scaled by the
/// source pixel's own alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opacity written for a source pixel of alpha `source_alpha`.
    pub fn scaled_alpha(&self, source_alpha: u8) -> u8 {
        ((u32::from(self.a) * u32::from(source_alpha) + 127) / 255) as u8
    }
}

/// Signed pixel displacement applied when projecting onto a canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }

    /// Integer-truncated center point.
    pub fn center(&self) -> (i64, i64) {
        (i64::from(self.width / 2), i64::from(self.height / 2))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fully transparent (0,0,0,0) image of the given size.
pub fn transparent_canvas(size: CanvasSize) -> RgbaImage {
    RgbaImage::new(size.width, size.height)
}
