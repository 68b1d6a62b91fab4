use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_line_dist;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{round_angle, round_coord, same_coord};

use super::{Point, Polygon, Region, Segment};

/// A non-degenerate triangle `ABC`.
///
/// Edge `a` is opposite vertex `A` (`a = BC`), `b = CA`, `c = AB`.
#[derive(Debug, Clone)]
pub struct Triangle {
    vertices: [Point; 3],
    edges: [Segment; 3],
}

impl Triangle {
    /// Creates the triangle with vertices `a`, `b`, `c`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the vertices are collinear
    /// (including coincident vertices).
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self> {
        let collinear = a == b
            || same_coord(
                point_to_line_dist(&c.to_point2(), &a.to_point2(), &(b.to_point2() - a.to_point2())),
                0.0,
            );
        if collinear {
            return Err(GeometryError::Degenerate(format!("triangle vertices {a}, {b}, {c} are collinear")).into());
        }
        Ok(Self {
            vertices: [a, b, c],
            edges: [Segment::new(b, c), Segment::new(c, a), Segment::new(a, b)],
        })
    }

    #[must_use]
    pub fn vertex_a(&self) -> &Point {
        &self.vertices[0]
    }

    #[must_use]
    pub fn vertex_b(&self) -> &Point {
        &self.vertices[1]
    }

    #[must_use]
    pub fn vertex_c(&self) -> &Point {
        &self.vertices[2]
    }

    /// Edge `BC`.
    #[must_use]
    pub fn edge_a(&self) -> &Segment {
        &self.edges[0]
    }

    /// Edge `CA`.
    #[must_use]
    pub fn edge_b(&self) -> &Segment {
        &self.edges[1]
    }

    /// Edge `AB`.
    #[must_use]
    pub fn edge_c(&self) -> &Segment {
        &self.edges[2]
    }

    /// Interior angle at `A` (angle BAC), in radians.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.angle_opposite(0)
    }

    /// Interior angle at `B` (angle CBA), in radians.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.angle_opposite(1)
    }

    /// Interior angle at `C` (angle ACB), in radians.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.angle_opposite(2)
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        round_coord(self.edges.iter().map(Segment::length).sum())
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        let outline = self.vertices.map(|p| p.to_point2());
        round_coord(signed_area_2d(&outline).abs())
    }

    /// Whether `point` is inside the triangle or on its boundary.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.contains_point(point)
    }

    /// The same outline as a general polygon.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_vertices(self.vertices.to_vec())
    }

    /// Law of cosines for the angle opposite edge `i`.
    fn angle_opposite(&self, i: usize) -> f64 {
        let v = self.vertices.map(|p| p.to_point2());
        let side = |k: usize| (v[(k + 1) % 3] - v[(k + 2) % 3]).norm();
        let (opposite, s1, s2) = (side(i), side((i + 1) % 3), side((i + 2) % 3));
        let cos = ((s1 * s1 + s2 * s2 - opposite * opposite) / (2.0 * s1 * s2)).clamp(-1.0, 1.0);
        round_angle(cos.acos())
    }
}

impl Region for Triangle {
    fn corners(&self) -> &[Point] {
        &self.vertices
    }

    fn boundary(&self) -> &[Segment] {
        &self.edges
    }
}

/// Triangles are equal when they have the same vertices, in any cyclic order.
impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.same_outline(&other.vertices)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.vertices;
        write!(f, "Triangle: ({a}, {b}, {c})")
    }
}
