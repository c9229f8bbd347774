//! Levels, i.e. sparse arrangements of catalog tiles on a hexagonal grid.

use crate::error::*;
use crate::geo;
use crate::grid::Axial;
use crate::tile::Tile;

use log::debug;
use nalgebra::Point2;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A catalog tile placed on the grid.
#[derive(Clone, Debug)]
pub struct PlacedTile {
    coords: Axial,
    tile: &'static Tile,
    position: Point2<f32>,
}

impl PlacedTile {
    pub fn coords(&self) -> Axial {
        self.coords
    }

    pub fn tile(&self) -> &'static Tile {
        self.tile
    }

    /// The pixel position of the center of the tile, relative to
    /// the center of the tile at the origin.
    pub fn position(&self) -> Point2<f32> {
        self.position
    }
}

/// A level maps axial coordinates to placed tiles.
///
/// The pixel positions of all tiles are derived from the radius of the
/// level's hexagons. They are computed on insertion and only change on
/// an explicit call to [`LevelMap::recompute_positions`].
///
/// [`LevelMap::recompute_positions`]: struct.LevelMap.html#method.recompute_positions
#[derive(Clone, Debug)]
pub struct LevelMap {
    radius: u32,
    tiles: HashMap<Axial, PlacedTile>,
}

impl LevelMap {
    pub fn new(radius: u32) -> LevelMap {
        LevelMap { radius, tiles: HashMap::new() }
    }

    /// The hexagon radius the tile positions are currently based on.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Place a tile at the given coordinates, which must not be occupied.
    pub fn insert(&mut self, coords: Axial, tile: &'static Tile) -> Result<()> {
        match self.tiles.entry(coords) {
            Entry::Occupied(_) => Err(Error::DuplicateCoordinate(coords)),
            Entry::Vacant(e) => {
                let position = geo::axial_to_pixel(coords, self.radius);
                e.insert(PlacedTile { coords, tile, position });
                Ok(())
            }
        }
    }

    /// Place a tile at the given coordinates, replacing and returning
    /// the tile previously placed there, if any.
    pub fn replace(&mut self, coords: Axial, tile: &'static Tile) -> Option<&'static Tile> {
        let position = geo::axial_to_pixel(coords, self.radius);
        self.tiles.insert(coords, PlacedTile { coords, tile, position }).map(|p| p.tile)
    }

    pub fn get(&self, coords: Axial) -> Option<&PlacedTile> {
        self.tiles.get(&coords)
    }

    /// Iterate over all placed tiles in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item=&PlacedTile> + Clone + '_ {
        self.tiles.values()
    }

    /// Set a new hexagon radius and recompute the positions of all tiles.
    pub fn recompute_positions(&mut self, radius: u32) {
        self.radius = radius;
        for t in self.tiles.values_mut() {
            t.position = geo::axial_to_pixel(t.coords, radius);
        }
    }
}

/// The coordinates of the starting level.
pub const FIXED_LAYOUT: [Axial; 9] = [
    Axial::new( 0, 0),
    Axial::new(-1, 1),
    Axial::new( 0, 1),
    Axial::new(-2, 2),
    Axial::new(-1, 2),
    Axial::new( 0, 2),
    Axial::new(-2, 3),
    Axial::new(-1, 3),
    Axial::new(-2, 4),
];

/// Build the starting level, assigning catalog tiles in order to
/// [`FIXED_LAYOUT`]. A short catalog yields a smaller level.
///
/// [`FIXED_LAYOUT`]: constant.FIXED_LAYOUT.html
pub fn fixed(catalog: &'static [Tile], radius: u32) -> Result<LevelMap> {
    let mut level = LevelMap::new(radius);
    for (coords, tile) in FIXED_LAYOUT.iter().zip(catalog) {
        level.insert(*coords, tile)?;
    }
    debug!("Loaded a level with {} tiles at radius {}", level.len(), radius);
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::STANDARD_TILES;

    use quickcheck::*;
    use std::collections::HashSet;

    #[test]
    fn fixed_level_round_trip() {
        let level = fixed(&STANDARD_TILES, 150).unwrap();
        assert_eq!(level.len(), FIXED_LAYOUT.len());
        let coords = level.tiles().map(|t| t.coords()).collect::<HashSet<_>>();
        assert_eq!(coords, FIXED_LAYOUT.iter().cloned().collect::<HashSet<_>>());
        // Restartable
        assert_eq!(level.tiles().count(), level.tiles().count());
        for (i, c) in FIXED_LAYOUT.iter().enumerate() {
            let t = level.get(*c).unwrap();
            assert!(std::ptr::eq(t.tile(), &STANDARD_TILES[i]));
        }
    }

    #[test]
    fn fixed_level_short_catalog() {
        let level = fixed(&STANDARD_TILES[..4], 150).unwrap();
        assert_eq!(level.len(), 4);
        assert!(level.get(Axial::new(-1, 2)).is_none());
    }

    #[test]
    fn duplicate_insert_rejected() {
        let mut level = LevelMap::new(100);
        level.insert(Axial::new(1, 1), &STANDARD_TILES[0]).unwrap();
        match level.insert(Axial::new(1, 1), &STANDARD_TILES[1]) {
            Err(Error::DuplicateCoordinate(c)) => assert_eq!(c, Axial::new(1, 1)),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(level.len(), 1);
        assert_eq!(level.get(Axial::new(1, 1)).unwrap().tile().id(), 15);
    }

    #[test]
    fn replace_overwrites() {
        let mut level = LevelMap::new(100);
        assert!(level.replace(Axial::new(0, 0), &STANDARD_TILES[0]).is_none());
        let old = level.replace(Axial::new(0, 0), &STANDARD_TILES[5]);
        assert_eq!(old.map(Tile::id), Some(15));
        assert_eq!(level.get(Axial::new(0, 0)).unwrap().tile().id(), 20);
        assert_eq!(level.len(), 1);
    }

    #[test]
    fn shared_templates() {
        let mut level = LevelMap::new(100);
        level.insert(Axial::new(0, 0), &STANDARD_TILES[3]).unwrap();
        level.insert(Axial::new(1, 0), &STANDARD_TILES[3]).unwrap();
        let a = level.get(Axial::new(0, 0)).unwrap().tile();
        let b = level.get(Axial::new(1, 0)).unwrap().tile();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn prop_positions_match_radius() {
        fn prop(cs: Vec<Axial>, r1: u8, r2: u8) -> bool {
            let (r1, r2) = (r1 as u32 + 1, r2 as u32 + 1);
            let mut level = LevelMap::new(r1);
            for c in &cs {
                level.replace(*c, &STANDARD_TILES[0]);
            }
            let before = level.tiles().all(|t| t.position() == geo::axial_to_pixel(t.coords(), r1));
            level.recompute_positions(r2);
            let after = level.tiles().all(|t| t.position() == geo::axial_to_pixel(t.coords(), r2));
            let unique = cs.iter().collect::<HashSet<_>>().len();
            before && after && level.radius() == r2 && level.len() == unique
        }
        quickcheck(prop as fn(Vec<Axial>, u8, u8) -> bool);
    }
}
