use std::path::PathBuf;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::{
    BACKGROUND_SIZE, BLUR_SIZE, DEFAULT_BACKGROUND_PATH, MAIN_COLOR, OUTLINE_COLOR,
    OUTLINE_OFFSET, POKEMON_SIZE, SHADOW_COLOR, SHADOW_OFFSET,
};
use crate::error::{Result, SilhouetteError};
use crate::pixel::{CanvasSize, Color, Offset};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Background asset, resized to `canvas_size` on first use.
    #[serde(default = "default_background")]
    pub background: PathBuf,
    /// Size of both output artifacts.
    #[serde(default = "default_canvas_size")]
    pub canvas_size: CanvasSize,
    /// Bounding box the source sprite is scaled into.
    #[serde(default = "default_sprite_size")]
    pub sprite_size: CanvasSize,
    /// Intermediate size of the softening pass.
    #[serde(default = "default_blur_size")]
    pub blur_size: CanvasSize,
    #[serde(default)]
    pub resample: ResampleFilter,
    #[serde(default)]
    pub style: SilhouetteStyle,
}

fn default_background() -> PathBuf {
    PathBuf::from(DEFAULT_BACKGROUND_PATH)
}
fn default_canvas_size() -> CanvasSize {
    BACKGROUND_SIZE
}
fn default_sprite_size() -> CanvasSize {
    POKEMON_SIZE
}
fn default_blur_size() -> CanvasSize {
    BLUR_SIZE
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            canvas_size: BACKGROUND_SIZE,
            sprite_size: POKEMON_SIZE,
            blur_size: BLUR_SIZE,
            resample: ResampleFilter::default(),
            style: SilhouetteStyle::default(),
        }
    }
}

impl PipelineConfig {
    /// Reject sizes the pipeline cannot render into.
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("canvas_size", self.canvas_size),
            ("sprite_size", self.sprite_size),
            ("blur_size", self.blur_size),
        ] {
            if size.is_empty() {
                return Err(SilhouetteError::Config(format!(
                    "{name} must be non-zero, got {size}"
                )));
            }
        }
        Ok(())
    }
}

/// Resampling filter used for sprite scaling, background fitting and the
/// softening pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    #[default]
    Bicubic,
    Gaussian,
    Lanczos3,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Bilinear => FilterType::Triangle,
            Self::Bicubic => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Bilinear => write!(f, "Bilinear"),
            Self::Bicubic => write!(f, "Bicubic"),
            Self::Gaussian => write!(f, "Gaussian"),
            Self::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

/// One flat-colored silhouette pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SilhouetteLayer {
    pub color: Color,
    #[serde(default)]
    pub offset: Offset,
}

impl SilhouetteLayer {
    pub const fn new(color: Color, offset: Offset) -> Self {
        Self { color, offset }
    }
}

/// The three passes that make up the hidden artifact. The shadow is also
/// drawn under the revealed sprite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SilhouetteStyle {
    pub shadow: SilhouetteLayer,
    pub outline: SilhouetteLayer,
    pub fill: SilhouetteLayer,
}

impl Default for SilhouetteStyle {
    fn default() -> Self {
        Self {
            shadow: SilhouetteLayer::new(SHADOW_COLOR, SHADOW_OFFSET),
            outline: SilhouetteLayer::new(OUTLINE_COLOR, OUTLINE_OFFSET),
            fill: SilhouetteLayer::new(MAIN_COLOR, Offset::new(0, 0)),
        }
    }
}
