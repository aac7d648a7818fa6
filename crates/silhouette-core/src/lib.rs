pub mod batch;
pub mod compositor;
pub mod consts;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod pixel;
