use std::io::Write;
use std::path::Path;

use image::error::{DecodingError, ImageFormatHint};
use image::{ColorType, DynamicImage, ImageError, ImageFormat, ImageReader, RgbaImage};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{Result, SilhouetteError};
use crate::pixel::CanvasSize;

/// Basic facts about a raster file on disk.
#[derive(Clone, Debug)]
pub struct ImageInfo {
    pub size: CanvasSize,
    pub color_type: ColorType,
    pub format: Option<ImageFormat>,
}

fn decode_error(path: &Path, source: ImageError) -> SilhouetteError {
    SilhouetteError::ImageDecode {
        path: path.to_path_buf(),
        source,
    }
}

fn write_error(path: &Path, source: ImageError) -> SilhouetteError {
    SilhouetteError::ImageWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// Decode any supported raster file, sniffing the format from its content.
pub fn decode(path: &Path) -> Result<(DynamicImage, Option<ImageFormat>)> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_error(path, ImageError::IoError(e)))?;
    let format = reader.format();
    let img = reader.decode().map_err(|e| decode_error(path, e))?;

    if img.width() == 0 || img.height() == 0 {
        return Err(decode_error(
            path,
            ImageError::Decoding(DecodingError::new(
                ImageFormatHint::Unknown,
                "image has no pixels",
            )),
        ));
    }

    Ok((img, format))
}

/// Load an image and convert it to RGBA8, whatever its native color type.
///
/// Palette, grayscale, 16-bit and float sources all gain a full alpha
/// channel here so later alpha math is well defined.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let (img, _) = decode(path)?;
    debug!(
        path = %path.display(),
        color = ?img.color(),
        width = img.width(),
        height = img.height(),
        "Decoded image"
    );
    Ok(img.into_rgba8())
}

/// Read dimensions and color type without converting the pixels.
pub fn read_info(path: &Path) -> Result<ImageInfo> {
    let (img, format) = decode(path)?;
    Ok(ImageInfo {
        size: CanvasSize::new(img.width(), img.height()),
        color_type: img.color(),
        format,
    })
}

/// Create `dir` and its parents if missing.
///
/// An existing non-directory at `dir` is an error.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if !dir.exists() {
        debug!(dir = %dir.display(), "Creating directory");
        std::fs::create_dir_all(dir)?;
    }
    if !dir.is_dir() {
        return Err(SilhouetteError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// Create the parent directory of an output file.
///
/// Failures are reported as `ImageWrite` on `path`, since the file cannot be
/// written there.
pub fn ensure_parent(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    ensure_dir(parent).map_err(|e| {
        let io_err = match e {
            SilhouetteError::Io(io_err) => io_err,
            other => std::io::Error::other(other.to_string()),
        };
        write_error(path, ImageError::IoError(io_err))
    })
}

/// Encode `img` into a temporary file next to `path`, in the format implied
/// by its extension.
fn stage(img: &RgbaImage, path: &Path) -> Result<NamedTempFile> {
    let format = ImageFormat::from_path(path).map_err(|e| write_error(path, e))?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| write_error(path, ImageError::IoError(e)))?;
    img.write_to(&mut tmp, format)
        .map_err(|e| write_error(path, e))?;
    tmp.flush()
        .map_err(|e| write_error(path, ImageError::IoError(e)))?;
    Ok(tmp)
}

fn commit(tmp: NamedTempFile, path: &Path) -> Result<()> {
    tmp.persist(path)
        .map_err(|e| write_error(path, ImageError::IoError(e.error)))?;
    Ok(())
}

/// Encode `img` in the format implied by the extension of `path`.
///
/// The bytes go to a temporary file in the target directory which is then
/// renamed over `path`, so an interrupted write never leaves a truncated
/// artifact behind.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let tmp = stage(img, path)?;
    commit(tmp, path)
}

/// Write two images so that either both land or neither does.
///
/// Both are fully encoded before either is renamed into place. If the second
/// rename fails the first file is removed again.
pub fn save_pair(first: (&RgbaImage, &Path), second: (&RgbaImage, &Path)) -> Result<()> {
    let (first_img, first_path) = first;
    let (second_img, second_path) = second;

    let first_tmp = stage(first_img, first_path)?;
    let second_tmp = stage(second_img, second_path)?;

    commit(first_tmp, first_path)?;
    if let Err(e) = commit(second_tmp, second_path) {
        if let Err(rm) = std::fs::remove_file(first_path) {
            warn!(path = %first_path.display(), error = %rm, "Failed to roll back artifact");
        }
        return Err(e);
    }
    Ok(())
}
