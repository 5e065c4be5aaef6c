//! Draw a few figures and write them to an SVG file.
//!
//! Run with: RUST_LOG=debug cargo run --example scene --features tracing -- scene.svg

use vec3d::{
    Arrow, BoxFigure, Color, Draw3dOptions, Figure, LineStyle, PointSet, Polygon, Segment, Vector,
    render_svg,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scene.svg".to_string());

    let v: Vector = "(4, 3, 2)".parse()?;
    let figures: Vec<Figure> = vec![
        Arrow::from_vector(&v)?.into(),
        BoxFigure::from_vector(&v)?.into(),
        Segment::new([0.0, 0.0, 0.0], [-2.0, 1.0, 3.0])
            .with_color(Color::Green)
            .with_line_style(LineStyle::DenselyDashed)
            .into(),
        Polygon::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
            .with_color(Color::Purple)
            .into(),
        PointSet::new([[1.0, 1.0, 1.0], [-1.0, -1.0, 2.0], [2.0, -1.0, -1.0]])
            .with_color(Color::Orange)
            .into(),
    ];

    let options = Draw3dOptions::new()
        .with_view(20.0, -50.0)
        .with_depthshade(true)
        .save_as(&out);
    let svg = render_svg(&figures, &options)?;
    tracing::info!(path = %out, bytes = svg.len(), "wrote scene");
    Ok(())
}
