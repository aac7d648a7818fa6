use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SilhouetteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {}: {source}", path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Background asset not found: {}", .0.display())]
    AssetMissing(PathBuf),

    #[error("{} has to be a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Empty image sequence")]
    EmptySequence,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SilhouetteError>;
