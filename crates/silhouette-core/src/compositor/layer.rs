use image::RgbaImage;
use tracing::debug;

use crate::error::{Result, SilhouetteError};
use crate::pixel::{transparent_canvas, CanvasSize, Offset, CHANNELS};

pub type Rgba8 = [u8; 4];

/// Non-premultiplied source-over blend of one pixel.
///
/// A transparent source leaves `dst` untouched; an opaque source or a
/// transparent destination yields `src` unchanged.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 || dst[3] == 0 {
        return src;
    }

    // Scaled by 255: dst contribution is dA * (1 - sA).
    let dst_weight = u32::from(dst[3]) * (255 - sa);
    let src_weight = sa * 255;
    let total = src_weight + dst_weight;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = u32::from(src[i]) * src_weight + u32::from(dst[i]) * dst_weight;
        out[i] = ((c + total / 2) / total) as u8;
    }
    out[3] = ((total + 127) / 255) as u8;
    out
}

/// Offset that centers `image` on `canvas`, using truncated centers.
pub fn centered_offset(canvas: CanvasSize, image: CanvasSize) -> Offset {
    let (cx, cy) = canvas.center();
    let (ix, iy) = image.center();
    Offset::new((cx - ix) as i32, (cy - iy) as i32)
}

/// Blend `src` over `canvas` with its top-left corner at `at`.
///
/// Parts of `src` that fall outside the canvas are clipped.
pub fn composite_at(canvas: &mut RgbaImage, src: &RgbaImage, at: Offset) {
    let canvas_size = CanvasSize::of(canvas);
    let src_size = CanvasSize::of(src);

    let cw = i64::from(canvas_size.width);
    let ch = i64::from(canvas_size.height);
    let sw = i64::from(src_size.width);
    let sh = i64::from(src_size.height);
    let ox = i64::from(at.dx);
    let oy = i64::from(at.dy);

    let x_start = (-ox).clamp(0, sw);
    let x_end = (cw - ox).clamp(0, sw);
    let y_start = (-oy).clamp(0, sh);
    let y_end = (ch - oy).clamp(0, sh);

    if x_start >= x_end || y_start >= y_end {
        return;
    }

    let canvas_stride = canvas_size.width as usize * CHANNELS;
    let src_stride = src_size.width as usize * CHANNELS;
    let span = (x_end - x_start) as usize * CHANNELS;
    let src_buf = src.as_raw();
    let dst_buf: &mut [u8] = canvas;

    for y in y_start..y_end {
        let src_at = y as usize * src_stride + x_start as usize * CHANNELS;
        let dst_at = (y + oy) as usize * canvas_stride + (x_start + ox) as usize * CHANNELS;

        let src_row = &src_buf[src_at..src_at + span];
        let dst_row = &mut dst_buf[dst_at..dst_at + span];

        for (d, s) in dst_row
            .chunks_exact_mut(CHANNELS)
            .zip(src_row.chunks_exact(CHANNELS))
        {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
}

/// Alpha-composite `images` in order onto one canvas.
///
/// The sequence must be non-empty; the first image defines the canvas size.
/// Every image, the first included, is centered on the canvas and drawn over
/// what came before it, so the result depends on the order.
pub fn layer_images(images: &[&RgbaImage]) -> Result<RgbaImage> {
    let first = images.first().ok_or(SilhouetteError::EmptySequence)?;
    let size = CanvasSize::of(first);
    let mut canvas = transparent_canvas(size);

    for img in images {
        let offset = centered_offset(size, CanvasSize::of(img));
        debug!(
            canvas = %size,
            image = %CanvasSize::of(img),
            dx = offset.dx,
            dy = offset.dy,
            "Layering image"
        );
        composite_at(&mut canvas, img, offset);
    }

    Ok(canvas)
}
