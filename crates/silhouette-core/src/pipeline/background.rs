use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use image::imageops::FilterType;
use image::RgbaImage;
use tracing::debug;

use crate::error::{Result, SilhouetteError};
use crate::io::load_rgba;
use crate::pixel::CanvasSize;

use super::scale::resize;

/// Decoded background asset, fitted to the canvas on first use.
///
/// Populated at most once and read-only afterwards.
#[derive(Debug)]
pub struct BackgroundCache {
    path: PathBuf,
    size: CanvasSize,
    filter: FilterType,
    image: OnceLock<RgbaImage>,
}

impl BackgroundCache {
    /// Fails fast with `AssetMissing` when `path` does not exist.
    pub fn new(path: &Path, size: CanvasSize, filter: FilterType) -> Result<Self> {
        if !path.is_file() {
            return Err(SilhouetteError::AssetMissing(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            size,
            filter,
            image: OnceLock::new(),
        })
    }

    pub fn get(&self) -> Result<&RgbaImage> {
        if let Some(img) = self.image.get() {
            return Ok(img);
        }

        let decoded = load_rgba(&self.path)?;
        let fitted = resize(&decoded, self.size, self.filter);
        debug!(
            path = %self.path.display(),
            size = %self.size,
            "Background cached"
        );
        Ok(self.image.get_or_init(|| fitted))
    }
}
