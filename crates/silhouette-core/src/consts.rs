use crate::pixel::{CanvasSize, Color, Offset};

/// Fixed output canvas: every artifact is this size.
pub const BACKGROUND_SIZE: CanvasSize = CanvasSize::new(260, 260);

/// Bounding box the source sprite is scaled into before compositing.
pub const POKEMON_SIZE: CanvasSize = CanvasSize::new(215, 215);

/// Intermediate size of the downscale/upscale softening pass.
pub const BLUR_SIZE: CanvasSize = CanvasSize::new(150, 150);

/// Flat fill of the hidden silhouette.
pub const MAIN_COLOR: Color = Color::new(16, 88, 178, 255);

/// Outline drawn behind the fill, nudged up and to the left.
pub const OUTLINE_COLOR: Color = Color::new(20, 62, 135, 255);
pub const OUTLINE_OFFSET: Offset = Offset::new(-1, -1);

/// Semi-transparent drop shadow shared by both artifacts.
pub const SHADOW_COLOR: Color = Color::new(0, 0, 0, 135);
pub const SHADOW_OFFSET: Offset = Offset::new(-6, 8);

/// Background asset location, relative to the working directory.
pub const DEFAULT_BACKGROUND_PATH: &str = "resources/background.png";

/// Default batch directories.
pub const DEFAULT_SOURCE_DIR: &str = "pokemons/originals";
pub const DEFAULT_HIDDEN_DIR: &str = "pokemons/hidden";
pub const DEFAULT_REVEALED_DIR: &str = "pokemons/revealed";

/// Separator between the numeric artifact id and the rest of a file name.
pub const ARTIFACT_ID_SEPARATOR: char = '_';
