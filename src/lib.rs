pub mod construction;
pub mod drawing;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PlanegeoError, Result};
pub use geometry::{Circle, Intersection, Line, Point, Polygon, Ray, Segment, Shape, ShapeRef, Triangle};
pub use operations::intersect::{get_intersect, intersects, Intersect};
