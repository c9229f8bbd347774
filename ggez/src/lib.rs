//! Rendering of hexmissions levels with ggez.

pub mod render;
pub mod visual;

pub use render::{ RenderError, Renderer };
pub use visual::HexVisual;
