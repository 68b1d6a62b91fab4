use crate::error::{GeometryError, Result};
use crate::geometry::{Shape, ShapeRef};
use crate::math::Vector;

use super::map_points;

/// Moves a primitive by a fixed displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
    dx: f64,
    dy: f64,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Translation by a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` unless `displacement` has
    /// exactly two components.
    pub fn from_vector(displacement: &Vector) -> Result<Self> {
        match displacement.as_slice() {
            [dx, dy] => Ok(Self::new(*dx, *dy)),
            other => Err(GeometryError::DimensionMismatch {
                expected: 2,
                found: other.len(),
            }
            .into()),
        }
    }

    /// Returns the translated copy of `shape`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if rounding the moved points
    /// collapses the primitive.
    pub fn execute<'a>(&self, shape: impl Into<ShapeRef<'a>>) -> Result<Shape> {
        let shape = shape.into();
        tracing::trace!(kind = ?shape.kind(), dx = self.dx, dy = self.dy, "translate");
        map_points(shape, |p| p.translate(self.dx, self.dy))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanegeoError;
    use crate::geometry::{Circle, Line, Point, Polygon, Segment};

    #[test]
    fn moves_every_defining_point() {
        let t = Translate::new(1.0, -2.0);
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert_eq!(
            t.execute(&seg).unwrap(),
            Segment::new(Point::new(1.0, -2.0), Point::new(2.0, -1.0)).into()
        );

        let c = Circle::new(Point::new(3.0, 3.0), 2.0).unwrap();
        assert_eq!(t.execute(&c).unwrap(), Circle::new(Point::new(4.0, 1.0), 2.0).unwrap().into());

        let poly = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 2.0)]).unwrap();
        let moved = Polygon::new(vec![Point::new(1.0, -2.0), Point::new(3.0, -2.0), Point::new(1.0, 0.0)]).unwrap();
        assert_eq!(t.execute(&poly).unwrap(), moved.into());
    }

    #[test]
    fn lines_stay_parallel() {
        let l = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).unwrap();
        let moved = Translate::new(0.0, 1.0).execute(&l).unwrap();
        assert_eq!(moved, Line::new(Point::new(0.0, 1.0), Point::new(5.0, 6.0)).unwrap().into());
    }

    #[test]
    fn from_vector_requires_two_components() {
        let v = Vector::new(vec![1.5, 2.5]).unwrap();
        assert_eq!(Translate::from_vector(&v).unwrap(), Translate::new(1.5, 2.5));
        let v3 = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();
        let err = Translate::from_vector(&v3).unwrap_err();
        assert!(matches!(
            err,
            PlanegeoError::Geometry(GeometryError::DimensionMismatch { expected: 2, found: 3 })
        ));
    }
}
