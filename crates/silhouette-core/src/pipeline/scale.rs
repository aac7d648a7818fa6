use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::pixel::CanvasSize;

/// Size that fits `source` into `target` along its longer axis.
///
/// When the source is wider than tall the width becomes `target.width`,
/// otherwise the height becomes `target.height`. The other axis is scaled by
/// the same factor and truncated, never below one pixel.
pub fn scaled_size(source: CanvasSize, target: CanvasSize) -> CanvasSize {
    if source.width > source.height {
        let difference = f64::from(target.width) / f64::from(source.width);
        let height = (difference * f64::from(source.height)) as u32;
        CanvasSize::new(target.width, height.max(1))
    } else {
        let difference = f64::from(target.height) / f64::from(source.height);
        let width = (difference * f64::from(source.width)) as u32;
        CanvasSize::new(width.max(1), target.height)
    }
}

fn unit(c: u8) -> f32 {
    f32::from(c) / 255.0
}

fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Resample `img` to `size` with colors weighted by alpha.
///
/// Fully transparent pixels contribute no color, so edges keep the sprite's
/// own color instead of fading towards black.
pub fn resize(img: &RgbaImage, size: CanvasSize, filter: FilterType) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let alpha = unit(a);
        Rgba([unit(r) * alpha, unit(g) * alpha, unit(b) * alpha, alpha])
    });
    let resized = imageops::resize(&premultiplied, size.width, size.height, filter);

    RgbaImage::from_fn(size.width, size.height, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let alpha = to_byte(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_byte(r / a), to_byte(g / a), to_byte(b / a), alpha])
    })
}

/// Resize `img` proportionally so its longer axis matches `target`.
pub fn scale_to_fit(img: &RgbaImage, target: CanvasSize, filter: FilterType) -> RgbaImage {
    resize(img, scaled_size(CanvasSize::of(img), target), filter)
}

/// Downscale to `through` and back up to the original size.
///
/// Deliberately lossy: it softens edges and hides fine sprite detail.
pub fn soften(img: &RgbaImage, through: CanvasSize, filter: FilterType) -> RgbaImage {
    let small = resize(img, through, filter);
    resize(&small, CanvasSize::of(img), filter)
}
