//! Hexagonal grids with overlaid coordinate systems.
pub mod axial;
pub mod cube;

pub use self::axial::*;
pub use self::cube::*;
