pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
mod polynom;
mod round;
mod vector;

pub use polynom::Polynom;
pub use round::{round, round_angle, round_coord, same_angle, same_coord, RoundKind};
pub use vector::Vector;

/// Raw 2D point type used by the solvers and the drawing boundary.
pub type Point2 = nalgebra::Point2<f64>;

/// Raw 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Number of decimal places coordinates and distances are rounded to
/// when storing or comparing them.
pub const DECIMAL_ROUND_COORDINATE: i32 = 3;

/// Number of decimal places angles in radians are rounded to.
pub const DECIMAL_ROUND_ANGLE: i32 = 15;

/// Half-extent used by drawing adapters to approximate unbounded lines and
/// rays as finite segments. Never used by geometric comparisons.
pub const LINE_LENGTH_MULTIPLIER: f64 = 1e6;
