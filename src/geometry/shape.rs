use std::fmt;

use super::{Circle, Line, Point, Polygon, Ray, Segment, Triangle};

/// Discriminant of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Ray,
    Segment,
    Circle,
    Polygon,
    Triangle,
}

/// Any of the seven primitives, owned.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    Circle(Circle),
    Polygon(Polygon),
    Triangle(Triangle),
}

/// Borrowed view of any primitive; what the intersection engine and the
/// drawer dispatch on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeRef<'a> {
    Point(&'a Point),
    Line(&'a Line),
    Ray(&'a Ray),
    Segment(&'a Segment),
    Circle(&'a Circle),
    Polygon(&'a Polygon),
    Triangle(&'a Triangle),
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.as_shape_ref().kind()
    }

    #[must_use]
    pub fn as_shape_ref(&self) -> ShapeRef<'_> {
        match self {
            Self::Point(p) => ShapeRef::Point(p),
            Self::Line(l) => ShapeRef::Line(l),
            Self::Ray(r) => ShapeRef::Ray(r),
            Self::Segment(s) => ShapeRef::Segment(s),
            Self::Circle(c) => ShapeRef::Circle(c),
            Self::Polygon(p) => ShapeRef::Polygon(p),
            Self::Triangle(t) => ShapeRef::Triangle(t),
        }
    }

    /// The point, if this is a `Shape::Point`.
    #[must_use]
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Self::Point(p) => Some(p),
            _ => None,
        }
    }
}

impl ShapeRef<'_> {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Point(_) => ShapeKind::Point,
            Self::Line(_) => ShapeKind::Line,
            Self::Ray(_) => ShapeKind::Ray,
            Self::Segment(_) => ShapeKind::Segment,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Triangle(_) => ShapeKind::Triangle,
        }
    }

    /// Clones the referenced primitive into an owned [`Shape`].
    #[must_use]
    pub fn to_shape(&self) -> Shape {
        match *self {
            Self::Point(p) => Shape::Point(*p),
            Self::Line(l) => Shape::Line(l.clone()),
            Self::Ray(r) => Shape::Ray(r.clone()),
            Self::Segment(s) => Shape::Segment(s.clone()),
            Self::Circle(c) => Shape::Circle(c.clone()),
            Self::Polygon(p) => Shape::Polygon(p.clone()),
            Self::Triangle(t) => Shape::Triangle(t.clone()),
        }
    }
}

impl<'a> From<&'a Shape> for ShapeRef<'a> {
    fn from(shape: &'a Shape) -> Self {
        shape.as_shape_ref()
    }
}

macro_rules! shape_conversions {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }

            impl<'a> From<&'a $variant> for ShapeRef<'a> {
                fn from(value: &'a $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

shape_conversions!(Point, Line, Ray, Segment, Circle, Polygon, Triangle);

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_shape_ref(), f)
    }
}

impl fmt::Display for ShapeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(p) => fmt::Display::fmt(p, f),
            Self::Line(l) => fmt::Display::fmt(l, f),
            Self::Ray(r) => fmt::Display::fmt(r, f),
            Self::Segment(s) => fmt::Display::fmt(s, f),
            Self::Circle(c) => fmt::Display::fmt(c, f),
            Self::Polygon(p) => fmt::Display::fmt(p, f),
            Self::Triangle(t) => fmt::Display::fmt(t, f),
        }
    }
}

/// A non-empty intersection result.
///
/// "No intersection" is represented by `None` at the call site, never by an
/// empty `Intersection`.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// A single shape: a point, an overlap, or a contained primitive.
    One(Shape),
    /// Several disjoint parts, e.g. the two points of a secant.
    Many(Vec<Shape>),
}

impl Intersection {
    /// Wraps collected parts: none becomes `None`, one becomes `One`.
    #[must_use]
    pub fn from_shapes(mut shapes: Vec<Shape>) -> Option<Self> {
        match shapes.len() {
            0 => None,
            1 => shapes.pop().map(Self::One),
            _ => Some(Self::Many(shapes)),
        }
    }

    /// All parts, in order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        match self {
            Self::One(s) => std::slice::from_ref(s),
            Self::Many(v) => v,
        }
    }

    #[must_use]
    pub fn into_shapes(self) -> Vec<Shape> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes().len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes().is_empty()
    }

    /// Whether `shape` is one of the parts.
    #[must_use]
    pub fn contains(&self, shape: &Shape) -> bool {
        self.shapes().contains(shape)
    }

    /// The point parts.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.shapes().iter().filter_map(Shape::as_point).copied().collect()
    }

    /// The single point, if the result is exactly one point.
    #[must_use]
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Self::One(s) => s.as_point(),
            Self::Many(_) => None,
        }
    }

    /// Same parts regardless of order.
    #[must_use]
    pub fn same_parts(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.shapes().iter().all(|s| other.contains(s))
            && other.shapes().iter().all(|s| self.contains(s))
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(s) => fmt::Display::fmt(s, f),
            Self::Many(parts) => {
                write!(f, "[")?;
                for (i, s) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{s}")?;
                }
                write!(f, "]")
            }
        }
    }
}
