//! Builds a small labeled construction, prints every pairwise
//! intersection, and writes the construction as SVG to stdout.
//!
//! Usage:
//! ```text
//! cargo run --example intersect > construction.svg
//! RUST_LOG=planegeo=trace cargo run --example intersect
//! ```

use std::fmt::Write as _;

use planegeo::construction::{Command, Construction, LabeledPoint};
use planegeo::drawing::{DrawStyle, Drawer, Surface};
use planegeo::math::Point2;
use planegeo::{get_intersect, Result};

/// Collects SVG elements; y is flipped so that the construction reads
/// mathematically upright.
#[derive(Default)]
struct Svg {
    body: String,
}

impl Surface for Svg {
    fn draw_segment(&mut self, from: &Point2, to: &Point2) {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" />"#,
            from.x, -from.y, to.x, -to.y
        );
    }

    fn draw_circle(&mut self, center: &Point2, radius: f64) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="none" />"#,
            center.x, -center.y, radius
        );
    }

    fn draw_polygon(&mut self, outline: &[Point2]) {
        let points: Vec<String> = outline.iter().map(|p| format!("{},{}", p.x, -p.y)).collect();
        let _ = writeln!(self.body, r#"  <polygon points="{}" fill="none" />"#, points.join(" "));
    }
}

fn build() -> Result<Construction> {
    let mut construction = Construction::new();
    construction.add_points(&[
        LabeledPoint::new("A", 0.0, 0.0),
        LabeledPoint::new("B", 6.0, 0.0),
        LabeledPoint::new("C", 2.0, 5.0),
        LabeledPoint::new("D", -3.0, 2.0),
        LabeledPoint::new("E", 8.0, 4.0),
    ])?;
    construction.apply_all(&[
        Command::new("Triangle", ["A", "B", "C"], ["t", "a", "b", "c"]),
        Command::new("Circle", ["C", "3"], ["k"]),
        Command::new("Line", ["D", "E"], ["f"]),
        Command::new("Ray", ["B", "D"], ["r"]),
        Command::new("Midpoint", ["c"], ["M"]),
        Command::new("Reflect", ["t", "f"], ["t'"]),
        Command::new("Intersect", ["k", "f"], ["P", "Q"]),
    ])?;
    Ok(construction)
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for planegeo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planegeo=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("intersect=info".parse().unwrap_or_default())
        .add_directive("planegeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let construction = build()?;
    let labeled: Vec<_> = construction.iter().collect();
    for (i, (la, a)) in labeled.iter().enumerate() {
        for (lb, b) in &labeled[i + 1..] {
            if let Some(hit) = get_intersect(*a, *b) {
                tracing::info!("{la} x {lb} = {hit}");
            }
        }
    }

    let style = DrawStyle {
        point_size: 0.15,
        extent: 20.0,
    };
    let mut drawer = Drawer::with_style(Svg::default(), style);
    drawer.draw_all(construction.shapes());
    let svg = drawer.into_surface();
    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-12 -12 24 24" stroke="black" stroke-width="0.05">"#);
    print!("{}", svg.body);
    println!("</svg>");
    Ok(())
}
