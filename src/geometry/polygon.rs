use std::f64::consts::TAU;
use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{round_coord, Point2};

use super::{Point, Region, Segment};

/// A closed polygon.
///
/// Edges are derived from the vertices once, at construction:
/// `edges[i] = Segment(vertices[i], vertices[(i + 1) % n])`.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Segment>,
}

impl Polygon {
    /// Creates a polygon from its vertices in boundary order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for fewer than 3 vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        Ok(Self::from_vertices(vertices))
    }

    /// Creates a regular polygon around `center`.
    ///
    /// The first vertex sits at angle `rotation` (radians, from the x axis);
    /// the rest follow counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for fewer than 3 vertices or a
    /// negative radius.
    pub fn create_regular(vertex_count: usize, center: &Point, radius: f64, rotation: f64) -> Result<Self> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(GeometryError::Degenerate(format!("regular polygon radius must be >= 0, got {radius}")).into());
        }
        let step = TAU / vertex_count as f64;
        let vertices = (0..vertex_count)
            .map(|k| {
                let angle = rotation + step * k as f64;
                Point::new(
                    center.x() + radius * angle.cos(),
                    center.y() + radius * angle.sin(),
                )
            })
            .collect();
        Self::new(vertices)
    }

    pub(crate) fn from_vertices(vertices: Vec<Point>) -> Self {
        let n = vertices.len();
        let edges = (0..n)
            .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
            .collect();
        Self { vertices, edges }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    /// Sum of the edge lengths.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        round_coord(self.edges.iter().map(Segment::length).sum())
    }

    /// Enclosed area (shoelace formula; unsigned).
    #[must_use]
    pub fn area(&self) -> f64 {
        let outline: Vec<Point2> = self.vertices.iter().map(Point::to_point2).collect();
        round_coord(signed_area_2d(&outline).abs())
    }

    /// Whether `point` is inside the polygon or on its boundary.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.contains_point(point)
    }
}

impl Region for Polygon {
    fn corners(&self) -> &[Point] {
        &self.vertices
    }

    fn boundary(&self) -> &[Segment] {
        &self.edges
    }
}

/// Polygons are equal when they trace the same vertex cycle.
impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.same_outline(&other.vertices)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon: (")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}
