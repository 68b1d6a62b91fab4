use std::fmt;
use std::str::FromStr;

use crate::error::ConstructionError;
use crate::geometry::Point;

/// A free point as delivered by an importer.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl LabeledPoint {
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    /// The point, rounded to coordinate precision.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A named construction step: `outputs = name(inputs)`.
///
/// Inputs are labels of earlier results, except where a command takes a
/// number (the radius of `Circle`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl Command {
    pub fn new<I, O>(name: impl Into<String>, inputs: I, outputs: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            name: name.into(),
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}[{}]", self.outputs.join(", "), self.name, self.inputs.join(", "))
    }
}

/// The commands a [`Construction`](super::Construction) understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `Segment[A, B]`
    Segment,
    /// `Line[A, B]`
    Line,
    /// `Ray[A, B]`, from `A` through `B`.
    Ray,
    /// `Circle[M, A]` through a point, or `Circle[M, r]`.
    Circle,
    /// `Polygon[A, B, C, ...]`; extra outputs name the edges.
    Polygon,
    /// `Triangle[A, B, C]`; extra outputs name edges `a`, `b`, `c`.
    Triangle,
    /// `Midpoint[A, B]` or `Midpoint[s]`.
    Midpoint,
    /// `Intersect[X, Y]`; one output per part.
    Intersect,
    /// `Reflect[X, P]` or `Reflect[X, l]`.
    Reflect,
}

impl FromStr for CommandKind {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Segment" => Self::Segment,
            "Line" => Self::Line,
            "Ray" => Self::Ray,
            "Circle" => Self::Circle,
            "Polygon" => Self::Polygon,
            "Triangle" => Self::Triangle,
            "Midpoint" => Self::Midpoint,
            "Intersect" => Self::Intersect,
            "Reflect" => Self::Reflect,
            other => return Err(ConstructionError::UnknownCommand(other.to_string())),
        })
    }
}
