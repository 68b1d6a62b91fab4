//! Labeled construction store.
//!
//! The input boundary for importers: free points and named commands go in,
//! primitives come out under the labels the commands name. Results are
//! kept in a slot map and looked up by label; iteration follows insertion
//! order so a construction can be drawn back in the order it was built.

mod command;

pub use command::{Command, CommandKind, LabeledPoint};

use std::collections::{HashMap, HashSet};

use slotmap::SlotMap;

use crate::error::{ConstructionError, Result};
use crate::geometry::{Circle, Line, Point, Polygon, Ray, Segment, Shape, Triangle};
use crate::operations::intersect::get_intersect;
use crate::operations::transform::Reflect;

slotmap::new_key_type! {
    /// Handle of a stored construction result.
    pub struct ShapeId;
}

#[derive(Debug, Clone)]
struct Entry {
    label: String,
    shape: Shape,
}

/// Arena of labeled primitives built from points and commands.
#[derive(Debug, Default)]
pub struct Construction {
    entries: SlotMap<ShapeId, Entry>,
    labels: HashMap<String, ShapeId>,
}

impl Construction {
    /// Creates a new, empty construction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `shape` under `label`.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::DuplicateLabel` if the label is taken.
    pub fn insert(&mut self, label: impl Into<String>, shape: impl Into<Shape>) -> Result<ShapeId> {
        let label = label.into();
        if self.labels.contains_key(&label) {
            return Err(ConstructionError::DuplicateLabel(label).into());
        }
        let id = self.entries.insert(Entry {
            label: label.clone(),
            shape: shape.into(),
        });
        self.labels.insert(label, id);
        Ok(id)
    }

    /// Stores a free point.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::DuplicateLabel` if the label is taken.
    pub fn add_point(&mut self, point: &LabeledPoint) -> Result<ShapeId> {
        tracing::debug!(label = %point.label, x = point.x, y = point.y, "add point");
        self.insert(point.label.clone(), point.point())
    }

    /// Stores every point, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// See [`Construction::add_point`].
    pub fn add_points<'p>(&mut self, points: impl IntoIterator<Item = &'p LabeledPoint>) -> Result<()> {
        for point in points {
            self.add_point(point)?;
        }
        Ok(())
    }

    /// Runs a command and stores its results under its output labels.
    ///
    /// Outputs are filled in order. Results without an output label are
    /// dropped; output labels without a result (e.g. an `Intersect` with
    /// fewer parts than outputs, or none at all) stay unassigned. Returns
    /// the ids of the stored results.
    ///
    /// # Errors
    ///
    /// Returns a `ConstructionError` for an unknown command, wrong input or
    /// output count, unknown or taken labels and inputs of the wrong kind,
    /// and a `GeometryError` when the resulting primitive is degenerate.
    /// Nothing is stored on error.
    pub fn apply(&mut self, command: &Command) -> Result<Vec<ShapeId>> {
        let kind: CommandKind = command.name.parse()?;
        tracing::debug!(%command, "apply");

        if command.outputs.is_empty() {
            return Err(arity(command, "at least 1 output", 0));
        }
        let mut seen = HashSet::new();
        for label in &command.outputs {
            if self.labels.contains_key(label) || !seen.insert(label) {
                return Err(ConstructionError::DuplicateLabel(label.clone()).into());
            }
        }

        let results = self.evaluate(kind, command)?;
        if results.len() < command.outputs.len() {
            tracing::debug!(
                command = %command.name,
                results = results.len(),
                outputs = command.outputs.len(),
                "some outputs stay undefined"
            );
        }
        command
            .outputs
            .iter()
            .zip(results)
            .map(|(label, shape)| self.insert(label.clone(), shape))
            .collect()
    }

    /// Runs every command in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// See [`Construction::apply`].
    pub fn apply_all<'c>(&mut self, commands: impl IntoIterator<Item = &'c Command>) -> Result<()> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    /// The shape stored under `label`.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::UnknownLabel` if nothing is stored there.
    pub fn get(&self, label: &str) -> Result<&Shape> {
        self.id(label)
            .and_then(|id| self.shape(id))
            .ok_or_else(|| ConstructionError::UnknownLabel(label.to_string()).into())
    }

    #[must_use]
    pub fn id(&self, label: &str) -> Option<ShapeId> {
        self.labels.get(label).copied()
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.entries.get(id).map(|e| &e.shape)
    }

    #[must_use]
    pub fn label(&self, id: ShapeId) -> Option<&str> {
        self.entries.get(id).map(|e| e.label.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labeled shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Shape)> {
        self.entries.values().map(|e| (e.label.as_str(), &e.shape))
    }

    /// Shapes in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.entries.values().map(|e| &e.shape)
    }

    fn point(&self, label: &str) -> Result<Point> {
        match self.get(label)? {
            Shape::Point(p) => Ok(*p),
            _ => Err(wrong_kind(label, "point")),
        }
    }

    /// Resolves exactly `N` point inputs.
    fn points<const N: usize>(&self, command: &Command, expected: &'static str) -> Result<[Point; N]> {
        if command.inputs.len() != N {
            return Err(arity(command, expected, command.inputs.len()));
        }
        let mut points = [Point::origin(); N];
        for (slot, label) in points.iter_mut().zip(&command.inputs) {
            *slot = self.point(label)?;
        }
        Ok(points)
    }

    /// Resolves exactly two inputs of any kind.
    fn pair(&self, command: &Command) -> Result<(&Shape, &Shape)> {
        match command.inputs.as_slice() {
            [x, y] => Ok((self.get(x)?, self.get(y)?)),
            other => Err(arity(command, "2 inputs", other.len())),
        }
    }

    fn evaluate(&self, kind: CommandKind, command: &Command) -> Result<Vec<Shape>> {
        let inputs = &command.inputs;
        Ok(match kind {
            CommandKind::Segment => {
                let [a, b] = self.points(command, "2 inputs")?;
                vec![Segment::new(a, b).into()]
            }
            CommandKind::Line => {
                let [a, b] = self.points(command, "2 inputs")?;
                vec![Line::new(a, b)?.into()]
            }
            CommandKind::Ray => {
                let [a, b] = self.points(command, "2 inputs")?;
                vec![Ray::new(a, b)?.into()]
            }
            CommandKind::Circle => {
                let [center, through] = inputs.as_slice() else {
                    return Err(arity(command, "2 inputs", inputs.len()));
                };
                let center = self.point(center)?;
                let radius = if self.labels.contains_key(through) {
                    center.distance(&self.point(through)?)
                } else {
                    through
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| ConstructionError::InvalidNumber(through.clone()))?
                };
                vec![Circle::new(center, radius)?.into()]
            }
            CommandKind::Polygon => {
                if inputs.len() < 3 {
                    return Err(arity(command, "at least 3 inputs", inputs.len()));
                }
                let vertices = inputs.iter().map(|l| self.point(l)).collect::<Result<Vec<_>>>()?;
                let polygon = Polygon::new(vertices)?;
                let edges: Vec<Shape> = polygon.edges().iter().cloned().map(Shape::from).collect();
                std::iter::once(polygon.into()).chain(edges).collect()
            }
            CommandKind::Triangle => {
                let [a, b, c] = self.points(command, "3 inputs")?;
                let triangle = Triangle::new(a, b, c)?;
                let edges = [triangle.edge_a(), triangle.edge_b(), triangle.edge_c()].map(|e| Shape::from(e.clone()));
                std::iter::once(triangle.into()).chain(edges).collect()
            }
            CommandKind::Midpoint => match inputs.as_slice() {
                [segment] => match self.get(segment)? {
                    Shape::Segment(s) => vec![s.midpoint().into()],
                    _ => return Err(wrong_kind(segment, "segment")),
                },
                [_, _] => {
                    let [a, b] = self.points(command, "1 or 2 inputs")?;
                    vec![Segment::new(a, b).midpoint().into()]
                }
                other => return Err(arity(command, "1 or 2 inputs", other.len())),
            },
            CommandKind::Intersect => {
                let (x, y) = self.pair(command)?;
                get_intersect(x, y).map(|i| i.into_shapes()).unwrap_or_default()
            }
            CommandKind::Reflect => {
                let (shape, mirror) = self.pair(command)?;
                let reflect = match mirror {
                    Shape::Point(p) => Reflect::about_point(*p),
                    Shape::Line(l) => Reflect::about_line(l.clone()),
                    _ => return Err(wrong_kind(&inputs[1], "point or line")),
                };
                vec![reflect.execute(shape)?]
            }
        })
    }
}

fn arity(command: &Command, expected: &'static str, found: usize) -> crate::error::PlanegeoError {
    ConstructionError::Arity {
        command: command.name.clone(),
        expected,
        found,
    }
    .into()
}

fn wrong_kind(label: &str, expected: &'static str) -> crate::error::PlanegeoError {
    ConstructionError::WrongKind {
        label: label.to_string(),
        expected,
    }
    .into()
}
