pub mod config;
mod background;
mod orchestrator;
pub mod scale;
mod types;

pub use background::BackgroundCache;
pub use orchestrator::Pipeline;
pub use types::{ArtifactPaths, Artifacts, NoOpReporter, ProgressReporter};
