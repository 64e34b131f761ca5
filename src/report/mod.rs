//! Report module: terminal rendering and JSON export

pub mod export;
pub mod render;

pub use export::*;
pub use render::*;
