use image::RgbaImage;

use crate::pixel::{transparent_canvas, CanvasSize, Color, Offset, CHANNELS};

/// Recolor `source` flatly with `color`, shifted by `offset`.
///
/// The result has the same size as `source` and starts fully transparent.
/// Each source pixel lands at `(x + dx, y + dy)`; pixels whose destination
/// falls outside the canvas on either axis are dropped. The written alpha is
/// `color.a * source_alpha / 255`, rounded, so antialiased edges survive the
/// recoloring.
pub fn make_silhouette(source: &RgbaImage, color: Color, offset: Offset) -> RgbaImage {
    let size = CanvasSize::of(source);
    let mut out = transparent_canvas(size);

    let w = i64::from(size.width);
    let h = i64::from(size.height);
    let dx = i64::from(offset.dx);
    let dy = i64::from(offset.dy);

    // Source ranges whose destination stays in bounds, per axis.
    let x_start = (-dx).clamp(0, w);
    let x_end = (w - dx).clamp(0, w);
    let y_start = (-dy).clamp(0, h);
    let y_end = (h - dy).clamp(0, h);

    if x_start >= x_end || y_start >= y_end {
        return out;
    }

    let stride = size.width as usize * CHANNELS;
    let span = (x_end - x_start) as usize * CHANNELS;
    let src = source.as_raw();
    let dst: &mut [u8] = &mut out;

    for y in y_start..y_end {
        let src_at = y as usize * stride + x_start as usize * CHANNELS;
        let dst_at = (y + dy) as usize * stride + (x_start + dx) as usize * CHANNELS;

        let src_row = &src[src_at..src_at + span];
        let dst_row = &mut dst[dst_at..dst_at + span];

        for (d, s) in dst_row
            .chunks_exact_mut(CHANNELS)
            .zip(src_row.chunks_exact(CHANNELS))
        {
            d.copy_from_slice(&[color.r, color.g, color.b, color.scaled_alpha(s[3])]);
        }
    }

    out
}
