#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use silhouette_core::pipeline::config::PipelineConfig;

/// Solid image of one color.
pub fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(px))
}

/// Transparent image with an opaque `inner` square in the middle.
pub fn sprite_with_border(size: u32, inner: u32, px: [u8; 4]) -> RgbaImage {
    let start = (size - inner) / 2;
    RgbaImage::from_fn(size, size, |x, y| {
        let inside = (start..start + inner).contains(&x) && (start..start + inner).contains(&y);
        if inside {
            Rgba(px)
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Horizontal alpha ramp with varying colors.
pub fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        let a = ((x * 255) / w.max(1)) as u8;
        Rgba([(x * 7 % 256) as u8, (y * 13 % 256) as u8, 90, a])
    })
}

pub fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("write test png");
    path
}

/// Checkerboard background written to `dir`, with a config pointing at it.
pub fn config_with_background(dir: &Path) -> PipelineConfig {
    let bg = RgbaImage::from_fn(64, 64, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgba([230, 230, 230, 255])
        } else {
            Rgba([40, 120, 60, 255])
        }
    });
    let background = write_png(dir, "background.png", &bg);
    PipelineConfig {
        background,
        ..Default::default()
    }
}
