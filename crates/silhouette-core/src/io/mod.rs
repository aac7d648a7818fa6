pub mod image_io;

pub use image_io::{
    ensure_dir, ensure_parent, load_rgba, read_info, save_image, save_pair, ImageInfo,
};
