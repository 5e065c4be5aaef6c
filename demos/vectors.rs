//! Parse vectors and combine them.
//!
//! Run with: cargo run --example vectors -- "(1, 2, 3) (4, 5, 6)"

use vec3d::{Vector, add, angle_between, cross, dot, length, parse_vectors, to_degrees};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "(1, 2, 3) (4, 5, 6)".to_string());

    let vectors = parse_vectors(&input)?;
    for v in &vectors {
        println!("{v}  |v| = {:.4}", length(v));
    }
    if vectors.len() < 2 {
        return Ok(());
    }

    println!("sum = {}", add(&vectors)?);

    let (u, v) = (&vectors[0], &vectors[1]);
    println!("u · v = {}", dot(u, v)?);
    match angle_between(u, v) {
        Ok(theta) => println!("angle = {:.2}°", to_degrees(theta)),
        Err(e) => println!("angle: {e}"),
    }
    if u.dim() == 3 && v.dim() == 3 {
        let w: Vector = cross(u, v)?;
        println!("u × v = {w}");
    }

    // Errors render as miette diagnostics with the offending span.
    if let Err(e) = "(1, 2,, 3)".parse::<Vector>() {
        eprintln!("{:?}", miette::Report::new(e));
    }
    Ok(())
}
