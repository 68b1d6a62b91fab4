//! Boundary between the kernel and an external renderer.
//!
//! A renderer implements [`Surface`]; [`Drawer`] walks any primitive and
//! issues the matching draw calls. Unbounded Lines and Rays are cut to a
//! long finite segment here, and nowhere else: nothing computed in this
//! module flows back into geometric comparisons.

use crate::geometry::{Linear, Point, Region, ShapeRef};
use crate::math::{Point2, Vector2, LINE_LENGTH_MULTIPLIER};

/// Drawing capability supplied by a renderer. Coordinates are raw.
pub trait Surface {
    fn draw_segment(&mut self, from: &Point2, to: &Point2);

    fn draw_circle(&mut self, center: &Point2, radius: f64);

    /// Marks a point with a small diagonal cross of half-width `size`.
    fn draw_point(&mut self, at: &Point2, size: f64) {
        let d1 = Vector2::new(size, size);
        let d2 = Vector2::new(-size, size);
        self.draw_segment(&(at + d1), &(at - d1));
        self.draw_segment(&(at + d2), &(at - d2));
    }

    /// Closed outline; edge by edge unless the surface has a native path.
    fn draw_polygon(&mut self, outline: &[Point2]) {
        let n = outline.len();
        for i in 0..n {
            self.draw_segment(&outline[i], &outline[(i + 1) % n]);
        }
    }
}

/// Parameters controlling how primitives are turned into draw calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    /// Half-width of a point marker.
    pub point_size: f64,
    /// How many direction lengths an unbounded Line or Ray extends.
    pub extent: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            point_size: 0.1,
            extent: LINE_LENGTH_MULTIPLIER,
        }
    }
}

/// Walks primitives onto a [`Surface`].
#[derive(Debug)]
pub struct Drawer<S: Surface> {
    surface: S,
    style: DrawStyle,
}

impl<S: Surface> Drawer<S> {
    /// Creates a drawer with the default style.
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, DrawStyle::default())
    }

    pub fn with_style(surface: S, style: DrawStyle) -> Self {
        Self { surface, style }
    }

    #[must_use]
    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Gives the surface back.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draws one primitive.
    pub fn draw<'a>(&mut self, shape: impl Into<ShapeRef<'a>>) {
        let shape = shape.into();
        tracing::trace!(kind = ?shape.kind(), "draw");
        let extent = self.style.extent;
        match shape {
            ShapeRef::Point(p) => self.surface.draw_point(&p.to_point2(), self.style.point_size),
            ShapeRef::Line(l) => {
                let (a, d) = (l.a().to_point2(), l.direction() * extent);
                self.surface.draw_segment(&(a - d), &(a + d));
            }
            ShapeRef::Ray(r) => {
                let a = r.a().to_point2();
                self.surface.draw_segment(&a, &(a + r.direction() * extent));
            }
            ShapeRef::Segment(s) => self.surface.draw_segment(&s.a().to_point2(), &s.b().to_point2()),
            ShapeRef::Circle(c) => self.surface.draw_circle(&c.center().to_point2(), c.radius()),
            ShapeRef::Polygon(p) => self.draw_outline(p.corners()),
            ShapeRef::Triangle(t) => self.draw_outline(t.corners()),
        }
    }

    /// Draws every primitive in order.
    pub fn draw_all<'a, I, T>(&mut self, shapes: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<ShapeRef<'a>>,
    {
        for shape in shapes {
            self.draw(shape);
        }
    }

    fn draw_outline(&mut self, corners: &[Point]) {
        let outline: Vec<Point2> = corners.iter().map(Point::to_point2).collect();
        self.surface.draw_polygon(&outline);
    }
}

/// One call received by a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Point { at: Point2, size: f64 },
    Segment { from: Point2, to: Point2 },
    Circle { center: Point2, radius: f64 },
    Polygon(Vec<Point2>),
}

/// In-memory surface that records every call.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Surface for Recorder {
    fn draw_segment(&mut self, from: &Point2, to: &Point2) {
        self.commands.push(DrawCommand::Segment { from: *from, to: *to });
    }

    fn draw_circle(&mut self, center: &Point2, radius: f64) {
        self.commands.push(DrawCommand::Circle {
            center: *center,
            radius,
        });
    }

    fn draw_point(&mut self, at: &Point2, size: f64) {
        self.commands.push(DrawCommand::Point { at: *at, size });
    }

    fn draw_polygon(&mut self, outline: &[Point2]) {
        self.commands.push(DrawCommand::Polygon(outline.to_vec()));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Line, Polygon, Ray, Segment, Shape, Triangle};
    use approx::assert_relative_eq;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Surface that only knows segments and circles.
    #[derive(Default)]
    struct SegmentsOnly {
        segments: Vec<(Point2, Point2)>,
        circles: usize,
    }

    impl Surface for SegmentsOnly {
        fn draw_segment(&mut self, from: &Point2, to: &Point2) {
            self.segments.push((*from, *to));
        }

        fn draw_circle(&mut self, _center: &Point2, _radius: f64) {
            self.circles += 1;
        }
    }

    #[test]
    fn bounded_shapes_are_drawn_as_is() {
        let mut drawer = Drawer::new(Recorder::default());
        drawer.draw(&Segment::new(pt(0.0, 0.0), pt(1.0, 2.0)));
        drawer.draw(&Circle::new(pt(1.0, 1.0), 3.0).unwrap());
        drawer.draw(&pt(4.0, 5.0));

        let commands = drawer.into_surface().commands;
        assert_eq!(
            commands,
            vec![
                DrawCommand::Segment {
                    from: Point2::new(0.0, 0.0),
                    to: Point2::new(1.0, 2.0),
                },
                DrawCommand::Circle {
                    center: Point2::new(1.0, 1.0),
                    radius: 3.0,
                },
                DrawCommand::Point {
                    at: Point2::new(4.0, 5.0),
                    size: 0.1,
                },
            ]
        );
    }

    #[test]
    fn unbounded_shapes_get_a_long_extent() {
        let style = DrawStyle {
            extent: 1000.0,
            ..DrawStyle::default()
        };
        let mut drawer = Drawer::with_style(Recorder::default(), style);
        drawer.draw(&Line::new(pt(0.0, 0.0), pt(1.0, 0.0)).unwrap());
        drawer.draw(&Ray::new(pt(0.0, 0.0), pt(0.0, -2.0)).unwrap());

        let commands = &drawer.surface().commands;
        let DrawCommand::Segment { from, to } = &commands[0] else {
            panic!("line should be a segment, got {:?}", commands[0]);
        };
        assert_relative_eq!(from.x, -1000.0);
        assert_relative_eq!(to.x, 1000.0);

        let DrawCommand::Segment { from, to } = &commands[1] else {
            panic!("ray should be a segment, got {:?}", commands[1]);
        };
        assert_eq!(*from, Point2::origin());
        assert_relative_eq!(to.y, -2000.0);
    }

    #[test]
    fn default_extent_is_the_line_multiplier() {
        assert_relative_eq!(DrawStyle::default().extent, LINE_LENGTH_MULTIPLIER);
    }

    #[test]
    fn regions_go_through_draw_polygon() {
        let mut drawer = Drawer::new(Recorder::default());
        let t = Triangle::new(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)).unwrap();
        drawer.draw(&t);
        assert_eq!(
            drawer.surface().commands,
            vec![DrawCommand::Polygon(vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
            ])]
        );
    }

    #[test]
    fn default_methods_fall_back_to_segments() {
        let square = Polygon::new(vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)]).unwrap();
        let shapes: Vec<Shape> = vec![square.into(), pt(2.0, 2.0).into(), Circle::new(pt(0.0, 0.0), 1.0).unwrap().into()];

        let mut drawer = Drawer::new(SegmentsOnly::default());
        drawer.draw_all(&shapes);
        let surface = drawer.into_surface();
        // Four edges, then the two strokes of the point marker.
        assert_eq!(surface.segments.len(), 6);
        assert_eq!(surface.segments[3], (Point2::new(0.0, 1.0), Point2::new(0.0, 0.0)));
        let (from, to) = surface.segments[4];
        assert_relative_eq!(from, Point2::new(2.1, 2.1));
        assert_relative_eq!(to, Point2::new(1.9, 1.9));
        assert_eq!(surface.circles, 1);
    }
}
