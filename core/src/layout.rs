//! Placement of a level within the viewport.

use crate::error::*;
use crate::geo::{ self, Size };
use crate::level::LevelMap;

use log::debug;
use nalgebra::Vector2;

/// Compute the offset by which the tile positions of a level are
/// shifted onto the screen, given the size of the image drawn for
/// every tile and the size of the viewport.
///
/// The horizontal offset accounts for the width of the tile image,
/// the vertical offset does not. Both are rounded to whole pixels.
pub fn compute_offset(level: &LevelMap, visual: Size, viewport: Size) -> Result<Vector2<f32>> {
    let bounds = geo::bounding_box(level.tiles().map(|t| t.position()))
        .ok_or(Error::EmptyLevel)?;
    let x = ((viewport.width - bounds.width() + visual.width) / 2.).round();
    let y = ((viewport.height - bounds.height()) / 2.).round();
    debug!("Layout offset ({}, {}) for map bounds {}x{}", x, y, bounds.width(), bounds.height());
    Ok(Vector2::new(x, y))
}
