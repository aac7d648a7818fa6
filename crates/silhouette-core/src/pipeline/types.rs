use std::path::{Path, PathBuf};

use image::RgbaImage;

/// The two rendered images produced from one source sprite.
#[derive(Clone, Debug)]
pub struct Artifacts {
    /// Silhouette over background.
    pub hidden: RgbaImage,
    /// True-color sprite over background.
    pub revealed: RgbaImage,
}

/// Output locations of one artifact pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub hidden: PathBuf,
    pub revealed: PathBuf,
}

impl ArtifactPaths {
    pub fn new(hidden: impl Into<PathBuf>, revealed: impl Into<PathBuf>) -> Self {
        Self {
            hidden: hidden.into(),
            revealed: revealed.into(),
        }
    }

    /// Same file name under two output directories.
    pub fn in_dirs(file_name: &Path, hidden_dir: &Path, revealed_dir: &Path) -> Self {
        Self::new(hidden_dir.join(file_name), revealed_dir.join(file_name))
    }
}

/// Thread-safe progress reporting for batch runs.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A batch has started with `total_items` sources to consider.
    fn begin(&self, _total_items: usize) {}

    /// One source finished, whether rendered, skipped or failed.
    fn advance(&self, _source: &Path) {}

    fn finish(&self) {}
}

/// Reporter that ignores every event.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
