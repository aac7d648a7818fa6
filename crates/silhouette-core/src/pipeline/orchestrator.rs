use std::path::Path;
use std::time::Instant;

use image::imageops::FilterType;
use image::RgbaImage;
use tracing::{debug, info};

use crate::compositor::{layer_images, make_silhouette};
use crate::error::Result;
use crate::io::{ensure_parent, load_rgba, save_pair};
use crate::pixel::{transparent_canvas, CanvasSize};

use super::background::BackgroundCache;
use super::config::PipelineConfig;
use super::scale::{scale_to_fit, soften};
use super::types::Artifacts;

/// Renders hidden/revealed artifact pairs from source sprites.
///
/// Owns the background cache, so reuse one instance for many sources.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    filter: FilterType,
    background: BackgroundCache,
}

impl Pipeline {
    /// Fails with `AssetMissing` if the configured background does not exist.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let filter = config.resample.filter_type();
        let background = BackgroundCache::new(&config.background, config.canvas_size, filter)?;
        Ok(Self {
            config,
            filter,
            background,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Background fitted to the canvas, decoding it on first call.
    pub fn background(&self) -> Result<&RgbaImage> {
        self.background.get()
    }

    /// Populate the background cache ahead of concurrent use.
    pub fn warm(&self) -> Result<()> {
        self.background.get().map(|_| ())
    }

    /// Scale a decoded sprite and center it on a transparent canvas.
    pub fn normalize(&self, sprite: &RgbaImage) -> Result<RgbaImage> {
        let scaled = scale_to_fit(sprite, self.config.sprite_size, self.filter);
        debug!(
            from = %CanvasSize::of(sprite),
            to = %CanvasSize::of(&scaled),
            "Scaled sprite"
        );
        let canvas = transparent_canvas(self.config.canvas_size);
        layer_images(&[&canvas, &scaled])
    }

    /// Render both artifacts in memory from a decoded sprite.
    pub fn render(&self, sprite: &RgbaImage) -> Result<Artifacts> {
        let sprite = self.normalize(sprite)?;
        let background = self.background.get()?;
        let style = &self.config.style;

        let shadow = make_silhouette(&sprite, style.shadow.color, style.shadow.offset);
        let outline = make_silhouette(&sprite, style.outline.color, style.outline.offset);
        let fill = make_silhouette(&sprite, style.fill.color, style.fill.offset);

        let silhouette = layer_images(&[&shadow, &outline, &fill])?;
        let silhouette = soften(&silhouette, self.config.blur_size, self.filter);

        let pokemon = layer_images(&[&shadow, &sprite])?;
        let pokemon = soften(&pokemon, self.config.blur_size, self.filter);

        Ok(Artifacts {
            hidden: layer_images(&[background, &silhouette])?,
            revealed: layer_images(&[background, &pokemon])?,
        })
    }

    /// Render `source` and write the hidden and revealed artifacts.
    ///
    /// Output directories are created as needed. Existing outputs are
    /// overwritten; deciding whether to skip is up to the caller. A failed write
    /// does not leave a half-written pair.
    pub fn process(&self, source: &Path, hidden: &Path, revealed: &Path) -> Result<()> {
        info!(source = %source.display(), "Starting to process");
        let start = Instant::now();

        ensure_parent(hidden)?;
        ensure_parent(revealed)?;

        let sprite = load_rgba(source)?;
        let artifacts = self.render(&sprite)?;

        info!(hidden = %hidden.display(), revealed = %revealed.display(), "Saving");
        save_pair((&artifacts.hidden, hidden), (&artifacts.revealed, revealed))?;

        info!(elapsed_ms = start.elapsed().as_millis() as u64, "Done");
        Ok(())
    }
}
