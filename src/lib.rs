//! Vector math and 3D figure rendering.
//!
//! The math layer works on [`Vector`]s of any dimension:
//!
//! ```
//! use vec3d::{Vector, add, dot};
//!
//! let u = Vector::from([1, 2, 3]);
//! let v: Vector = "(4, 5, 6)".parse()?;
//! assert_eq!(add(&[u.clone(), v.clone()])?, Vector::from([5, 7, 9]));
//! assert_eq!(dot(&u, &v)?, 32.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The render layer draws 3D [`Figure`]s onto a [`Backend`]; [`render_svg`]
//! does so with the built-in SVG backend.

pub mod errors;
mod log;
pub mod math;
pub mod parse;
pub mod render;
pub mod types;
pub mod vector;

pub use errors::{ErrorKind, ParseError, RenderError, VectorError};
pub use math::{
    add, angle_between, cross, dot, length, linear_combination, scale, subtract, to_degrees,
    to_radians, unit,
};
pub use parse::{parse_vector, parse_vectors};
pub use render::{
    Arrow, AxisRange, Backend, BoxFigure, Color, Draw, Draw3dOptions, Figure, LineStyle, Marker,
    PointSet, Polygon, Segment, Stroke, SvgBackend, draw3d, render_svg,
};
pub use types::{Degrees, Radians};
pub use vector::Vector;
