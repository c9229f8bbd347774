
use std::fmt;
use super::*;

/// Axial coordinates.
///
/// The `q` axis coincides with the cube `x` axis and the `r` axis
/// with the cube `z` axis, the third cube coordinate being implied
/// by `x + y + z = 0`.
///
/// Guide: [Axial Coordinates]
///
/// [Axial Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-axial
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Axial {
    pub q: i32,
    pub r: i32
}

impl Axial {
    pub const fn new(q: i32, r: i32) -> Axial {
        Axial { q, r }
    }

    pub fn origin() -> Axial {
        Axial::new(0, 0)
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}

impl From<Cube> for Axial {
    fn from(c: Cube) -> Axial {
        Axial { q: c.x(), r: c.z() }
    }
}

impl From<Axial> for Cube {
    fn from(a: Axial) -> Cube {
        Cube::new_xz(a.q, a.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;
    use rand::Rng;

    impl Arbitrary for Axial {
        fn arbitrary<G: Gen>(g: &mut G) -> Axial {
            // Kept small enough for pixel positions to stay exact in f32.
            Axial::new(g.gen_range(-100, 100), g.gen_range(-100, 100))
        }
    }

    #[test]
    fn prop_from_to_cube_identity() {
        fn prop(a: Axial) -> bool {
            Axial::from(Cube::from(a)) == a
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn display() {
        assert_eq!(Axial::new(-2, 4).to_string(), "(-2,4)");
    }
}
