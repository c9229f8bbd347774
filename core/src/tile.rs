//! The catalog of tiles a level is built from.

use num_traits::FromPrimitive;

/// The sides of a tile, numbered clockwise starting at the top edge.
#[derive(PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
#[derive(FromPrimitive, Debug)]
pub enum Side {
    Top         = 0,
    TopRight    = 1,
    BottomRight = 2,
    Bottom      = 3,
    BottomLeft  = 4,
    TopLeft     = 5
}

/// The set of sides of a tile that have a door.
#[derive(PartialEq, Eq, Copy, Clone, Default, Hash, Debug)]
pub struct Doors(u8);

impl Doors {
    pub const NONE: Doors = Doors(0);

    pub const fn of(sides: &[Side]) -> Doors {
        let mut bits = 0u8;
        let mut i = 0;
        while i < sides.len() {
            bits |= 1 << (sides[i] as u8);
            i += 1;
        }
        Doors(bits)
    }

    pub fn contains(self, side: Side) -> bool {
        self.0 & (1 << side as u8) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the sides with a door in clockwise order.
    pub fn iter(self) -> impl Iterator<Item=Side> {
        (0 .. 6).filter_map(Side::from_u8).filter(move |s| self.contains(*s))
    }
}

/// A tile design. Tiles in the catalog are never copied into a level,
/// placed tiles refer to them instead.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tile {
    id: u32,
    doors: Doors,
    vent: bool,
}

impl Tile {
    pub const fn new(id: u32, doors: Doors, vent: bool) -> Tile {
        Tile { id, doors, vent }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn doors(&self) -> Doors {
        self.doors
    }

    pub fn has_vent(&self) -> bool {
        self.vent
    }

    /// Whether there is a door on the side with the given index,
    /// counted clockwise from the top edge. Indices outside of
    /// `0..6` never have a door.
    pub fn has_door(&self, i: u8) -> bool {
        Side::from_u8(i).map_or(false, |s| self.doors.contains(s))
    }
}

use self::Side::*;

const fn doors(sides: &[Side]) -> Doors {
    Doors::of(sides)
}

/// The standard tiles of the board game, with contiguous ids.
pub static STANDARD_TILES: [Tile; 33] = [
    Tile::new(15, Doors::NONE, false),
    Tile::new(16, Doors::NONE, false),
    Tile::new(17, Doors::NONE, true),
    Tile::new(18, Doors::NONE, false),
    Tile::new(19, Doors::NONE, true),
    Tile::new(20, Doors::NONE, false),
    Tile::new(21, doors(&[Top]), true),
    Tile::new(22, doors(&[TopRight]), false),
    Tile::new(23, doors(&[TopLeft]), false),
    Tile::new(24, doors(&[BottomRight]), false),
    Tile::new(25, doors(&[BottomLeft]), false),
    Tile::new(26, doors(&[Bottom]), false),
    Tile::new(27, doors(&[Top, TopLeft]), false),
    Tile::new(28, doors(&[BottomRight, TopLeft]), false),
    Tile::new(29, doors(&[BottomRight, Bottom]), false),
    Tile::new(30, doors(&[TopRight, BottomRight]), false),
    Tile::new(31, doors(&[TopRight, Bottom]), false),
    Tile::new(32, doors(&[TopRight, BottomLeft]), false),
    Tile::new(33, doors(&[Top, TopRight]), false),
    Tile::new(34, doors(&[Bottom, BottomLeft]), false),
    Tile::new(35, doors(&[Top, BottomRight]), true),
    Tile::new(36, doors(&[BottomLeft, TopLeft]), false),
    Tile::new(37, doors(&[Top, TopLeft]), false),
    Tile::new(38, doors(&[Bottom, TopLeft]), false),
    Tile::new(39, doors(&[BottomRight, BottomLeft]), false),
    Tile::new(40, doors(&[Top, BottomLeft]), false),
    Tile::new(41, doors(&[Top, Bottom]), true),
    Tile::new(42, doors(&[Top, BottomRight, BottomLeft]), true),
    Tile::new(43, doors(&[TopRight, BottomRight, BottomLeft]), false),
    Tile::new(44, doors(&[BottomRight, BottomLeft, TopLeft]), false),
    Tile::new(45, doors(&[TopRight, Bottom, TopLeft]), false),
    Tile::new(46, doors(&[TopRight, Bottom, BottomLeft]), false),
    Tile::new(47, doors(&[Top, TopRight, BottomLeft]), false),
];
