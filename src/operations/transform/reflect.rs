use crate::error::Result;
use crate::geometry::{Line, Point, Shape, ShapeRef};

use super::map_points;

#[derive(Debug, Clone, PartialEq)]
enum Mirror {
    Point(Point),
    Line(Line),
}

/// Mirrors a primitive through a point or across a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Reflect {
    mirror: Mirror,
}

impl Reflect {
    /// Point reflection through `center` (a half turn).
    #[must_use]
    pub fn about_point(center: Point) -> Self {
        Self {
            mirror: Mirror::Point(center),
        }
    }

    /// Reflection across `axis`.
    #[must_use]
    pub fn about_line(axis: Line) -> Self {
        Self {
            mirror: Mirror::Line(axis),
        }
    }

    /// Returns the mirrored copy of `shape`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if rounding the mirrored points
    /// collapses the primitive.
    pub fn execute<'a>(&self, shape: impl Into<ShapeRef<'a>>) -> Result<Shape> {
        let shape = shape.into();
        tracing::trace!(kind = ?shape.kind(), mirror = ?self.mirror, "reflect");
        match &self.mirror {
            Mirror::Point(center) => map_points(shape, |p| p.reflect_about_point(center)),
            Mirror::Line(axis) => map_points(shape, |p| p.reflect_about_line(axis)),
        }
    }
}
