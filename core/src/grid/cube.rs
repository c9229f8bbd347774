//! Cube coordinates.

use nalgebra::geometry::Point3;

/// Cube coordinates, i.e. points in 3d space, satisfying `x + y + z = 0`.
///
/// Cube coordinates are points on a diagonal plane that "cuts through"
/// a cube grid (a cube made of many smaller cubes). The cubes intersecting
/// the plane project regular hexagons onto the plane, allowing to see the
/// plane as a hexagonal grid whereby the coordinates of each hexagon can be
/// identified with the coordinates of the cube it is projected from.
///
/// Guide: [Cube coordinates]
///
/// [Cube coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-cube
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Cube {
    p: Point3<i32>,
}

impl Cube {
    pub fn new_xz(x: i32, z: i32) -> Cube {
        Self::mk(x, -x - z, z)
    }

    pub fn x(&self) -> i32 { self.p.coords.x }
    pub fn y(&self) -> i32 { self.p.coords.y }
    pub fn z(&self) -> i32 { self.p.coords.z }

    fn mk(x: i32, y: i32, z: i32) -> Cube {
        let c = Cube { p: Point3::new(x, y, z) };
        debug_assert!(c.is_valid());
        c
    }

    /// Validity check for the cube coordinates, i.e. that they
    /// represent a point in the plane defined by `x + y + z = 0`.
    fn is_valid(&self) -> bool {
        self.x() + self.y() + self.z() == 0
    }
}
