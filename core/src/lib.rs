//! Layout and drawing of hexagonal tile maps for the hexmissions prototype.

#[macro_use]
extern crate num_derive;

pub mod clock;
pub mod config;
pub mod error;
pub mod geo;
pub mod grid;
pub mod layout;
pub mod level;
pub mod lifecycle;
pub mod scene;
pub mod tile;

pub use crate::error::{ Error, Result };
