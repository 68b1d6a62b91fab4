use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{round_coord, same_coord};

use super::Point;

/// A circle (the curve, not the disk).
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a circle. The radius is rounded to the coordinate precision.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `radius` is negative or not a number.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(GeometryError::Degenerate(format!("circle radius must be >= 0, got {radius}")).into());
        }
        Ok(Self {
            center,
            radius: round_coord(radius),
        })
    }

    #[must_use]
    pub fn center(&self) -> &Point {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Length of the circle.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        round_coord(TAU * self.radius)
    }

    /// Area of the enclosed disk.
    #[must_use]
    pub fn area(&self) -> f64 {
        round_coord(PI * self.radius * self.radius)
    }

    /// Whether `point` lies on the circle.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        same_coord((point.to_point2() - self.center.to_point2()).norm(), self.radius)
    }

    /// Distance from `point` to the nearest point of the circle.
    #[must_use]
    pub fn distance(&self, point: &Point) -> f64 {
        let d = (point.to_point2() - self.center.to_point2()).norm();
        round_coord((d - self.radius).abs())
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle: ({}, {})", self.center, self.radius)
    }
}
