pub mod layer;
pub mod silhouette;

pub use layer::{centered_offset, layer_images};
pub use silhouette::make_silhouette;
