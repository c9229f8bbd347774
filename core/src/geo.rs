//! Geometry of regular pointy-top hexagons in a 2d cartesian coordinate
//! system whose y-axis points down, as on a screen.

use crate::grid::{ Axial, Cube };

use nalgebra::geometry::Point2;
use nalgebra::Vector2;

/// The corners of a pointy-top hexagon of radius 2, at the angles
/// `60°·i + 30°`, with the x coordinates in units of `√3`.
///
/// Corners at these angles only have the coordinates `±√3/2`, `0`,
/// `±1/2` and `±1` on the unit circle, so they are scaled from these
/// exact values rather than from rounded sines and cosines.
const CORNERS: [(i32, i32); 6] = [
    ( 1,  1),
    ( 0,  2),
    (-1,  1),
    (-1, -1),
    ( 0, -2),
    ( 1, -1),
];

/// The center of the hexagon with the given axial coordinates
/// and radius (the distance from the center to any corner).
///
/// The hexagon at the origin is centered at `(0,0)`.
pub fn axial_to_pixel(a: Axial, radius: u32) -> Point2<f32> {
    let c = Cube::from(a);
    let size = radius as f32;
    let x = size * f32::sqrt(3.0) * (c.x() as f32 + c.z() as f32 / 2.);
    let y = size * 1.5 * c.z() as f32;
    Point2::new(x, y)
}

/// The corners of a hexagon centered at the origin, in order of
/// ascending angle starting at 30 degrees.
///
/// Coordinates are rounded half away from zero to whole pixels,
/// which keeps the hexagon symmetric in both axes.
pub fn hexagon_vertices(radius: u32) -> [Point2<i32>; 6] {
    let mut vertices = [Point2::origin(); 6];
    for (v, c) in vertices.iter_mut().zip(CORNERS.iter()) {
        *v = corner(radius, *c);
    }
    vertices
}

fn corner(radius: u32, (sx, sy): (i32, i32)) -> Point2<i32> {
    // Half radii are exact in f64, so `round` sees true halves.
    let half = f64::from(radius) / 2.;
    let x = (f64::from(sx) * half * f64::sqrt(3.0)).round();
    let y = (f64::from(sy) * half).round();
    Point2::new(x as i32, y as i32)
}

/// Axis-aligned bounds of a set of points.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Bounds {
    pub min: Point2<f32>,
    pub max: Point2<f32>,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Compute the bounds of the given points, if there are any.
pub fn bounding_box<I>(points: I) -> Option<Bounds>
where I: IntoIterator<Item=Point2<f32>> {
    let mut it = points.into_iter();
    let first = it.next()?;
    let init = Bounds { min: first, max: first };
    Some(it.fold(init, |b, p| Bounds {
        min: Point2::new(f32::min(b.min.x, p.x), f32::min(b.min.y, p.y)),
        max: Point2::new(f32::max(b.max.x, p.x), f32::max(b.max.y, p.y)),
    }))
}

/// The size of a rectangular area, e.g. the viewport or an image.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Size {
        Size { width, height }
    }

    /// The center relative to the top-left corner.
    pub fn center(&self) -> Vector2<f32> {
        Vector2::new(self.width / 2., self.height / 2.)
    }
}

/// A hexagon placed on a rectangular surface of its own, e.g. an
/// image that the hexagon is rendered into.
///
/// The surface covers every pixel touched by the rounded corners,
/// i.e. `max - min + 1` pixels per axis. The corners are translated
/// into surface coordinates and the ones on the right-most and
/// bottom-most edge are moved out by one pixel, so that fill and
/// border reach the far edges of the surface, just like they reach
/// the near ones.
#[derive(Clone, Debug)]
pub struct HexOutline {
    width: u32,
    height: u32,
    corners: [Point2<f32>; 6],
}

impl HexOutline {
    pub fn new(radius: u32) -> HexOutline {
        let vertices = hexagon_vertices(radius);
        let xs = vertices.iter().map(|p| p.x);
        let ys = vertices.iter().map(|p| p.y);
        let (min_x, max_x) = (xs.clone().min().unwrap_or(0), xs.max().unwrap_or(0));
        let (min_y, max_y) = (ys.clone().min().unwrap_or(0), ys.max().unwrap_or(0));
        let mut corners = [Point2::origin(); 6];
        for (c, v) in corners.iter_mut().zip(vertices.iter()) {
            let x = v.x - min_x + if v.x == max_x { 1 } else { 0 };
            let y = v.y - min_y + if v.y == max_y { 1 } else { 0 };
            *c = Point2::new(x as f32, y as f32);
        }
        HexOutline {
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
            corners,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// The corners in surface coordinates, in the same order
    /// as [`hexagon_vertices`].
    ///
    /// [`hexagon_vertices`]: fn.hexagon_vertices.html
    pub fn corners(&self) -> &[Point2<f32>; 6] {
        &self.corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;

    fn radius(r: u16) -> u32 {
        1 + (r % 1000) as u32
    }

    #[test]
    fn origin_maps_to_origin() {
        for r in &[1, 75, 100, 150] {
            assert_eq!(axial_to_pixel(Axial::origin(), *r), Point2::new(0., 0.));
        }
    }

    #[test]
    fn prop_axial_to_pixel_deterministic() {
        fn prop(a: Axial, r: u16) -> bool {
            axial_to_pixel(a, radius(r)) == axial_to_pixel(a, radius(r))
        }
        quickcheck(prop as fn(Axial, u16) -> bool);
    }

    #[test]
    fn prop_neighbour_centers_are_equidistant() {
        fn prop(a: Axial, r: u16) -> bool {
            let size = radius(r);
            let center = axial_to_pixel(a, size);
            let expected = f32::sqrt(3.0) * size as f32;
            [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)].iter().all(|(dq, dr)| {
                let n = axial_to_pixel(Axial::new(a.q + dq, a.r + dr), size);
                let d = nalgebra::distance(&center, &n);
                (d - expected).abs() <= expected * 1e-3
            })
        }
        quickcheck(prop as fn(Axial, u16) -> bool);
    }

    #[test]
    fn pointy_top_layout() {
        // Rows are stacked 3/2 radius apart and shifted by half a hexagon.
        let p = axial_to_pixel(Axial::new(-1, 2), 100);
        assert_eq!(p.y, 300.);
        assert!(p.x.abs() < 1e-3);
        let p = axial_to_pixel(Axial::new(0, 1), 100);
        assert!((p.x - 50. * f32::sqrt(3.0)).abs() < 1e-3);
    }

    #[test]
    fn prop_vertices_on_circle() {
        fn prop(r: u16) -> bool {
            let size = radius(r);
            hexagon_vertices(size).iter().all(|v| {
                let d = f32::hypot(v.x as f32, v.y as f32);
                (d - size as f32).abs() <= 1.
            })
        }
        quickcheck(prop as fn(u16) -> bool);
    }

    #[test]
    fn vertex_angles() {
        let vertices = hexagon_vertices(150);
        assert_eq!(vertices.len(), 6);
        for (i, v) in vertices.iter().enumerate() {
            let expected = 60. * i as f32 + 30.;
            let angle = (v.y as f32).atan2(v.x as f32).to_degrees();
            let angle = if angle < 0. { angle + 360. } else { angle };
            assert!((angle - expected).abs() < 0.5, "corner {} at {}", i, angle);
        }
    }

    #[test]
    fn vertices_rounded() {
        assert_eq!(hexagon_vertices(150), [
            Point2::new(130, 75), Point2::new(0, 150), Point2::new(-130, 75),
            Point2::new(-130, -75), Point2::new(0, -150), Point2::new(130, -75),
        ]);
    }

    #[test]
    fn vertices_rounded_odd_radius() {
        assert_eq!(hexagon_vertices(75), [
            Point2::new(65, 38), Point2::new(0, 75), Point2::new(-65, 38),
            Point2::new(-65, -38), Point2::new(0, -75), Point2::new(65, -38),
        ]);
        assert_eq!(hexagon_vertices(1)[3], Point2::new(-1, -1));
    }

    #[test]
    fn vertices_symmetric() {
        for r in 1 ..= 400 {
            let v = hexagon_vertices(r);
            let half = (r as i32 + 1) / 2;
            assert_eq!([v[0].y, v[2].y, v[3].y, v[5].y], [half, half, -half, -half], "radius {}", r);
            assert_eq!([v[1].y, v[4].y], [r as i32, -(r as i32)], "radius {}", r);
            assert_eq!(v[0].x, -v[2].x, "radius {}", r);
            assert_eq!(v[0].x, -v[3].x, "radius {}", r);
            assert_eq!(v[0].x, v[5].x, "radius {}", r);
            assert_eq!([v[1].x, v[4].x], [0, 0], "radius {}", r);
        }
    }

    #[test]
    fn outline_odd_radius() {
        let o = HexOutline::new(75);
        assert_eq!((o.width(), o.height()), (131, 151));
    }

    #[test]
    fn bounds() {
        assert_eq!(bounding_box(Vec::new()), None);
        let b = bounding_box(vec![
            Point2::new(1., -2.),
            Point2::new(-3., 4.),
            Point2::new(0., 0.),
        ]).unwrap();
        assert_eq!(b.min, Point2::new(-3., -2.));
        assert_eq!(b.max, Point2::new(1., 4.));
        assert_eq!((b.width(), b.height()), (4., 6.));
    }

    #[test]
    fn outline_reaches_surface_edges() {
        let o = HexOutline::new(150);
        assert_eq!((o.width(), o.height()), (261, 301));
        let b = bounding_box(o.corners().iter().cloned()).unwrap();
        assert_eq!(b.min, Point2::new(0., 0.));
        assert_eq!(b.max, Point2::new(261., 301.));
    }

    #[test]
    fn prop_outline_within_surface() {
        fn prop(r: u16) -> bool {
            let o = HexOutline::new(radius(r));
            let b = bounding_box(o.corners().iter().cloned()).unwrap();
            b.min == Point2::origin()
                && b.max.x == o.width() as f32
                && b.max.y == o.height() as f32
        }
        quickcheck(prop as fn(u16) -> bool);
    }
}
