//! Figure types for 3D scenes
//!
//! Each figure knows how to:
//! - List the coordinates that define it (used to size the plot)
//! - Draw itself onto a [`Backend`]

use enum_dispatch::enum_dispatch;
use glam::DVec3;

use super::backend::Backend;
use super::style::{Color, LineStyle, Marker, Stroke};
use crate::errors::{RenderError, VectorError};
use crate::vector::Vector;

/// Common behavior for all figures
#[enum_dispatch]
pub trait Draw {
    /// The points that define this figure
    fn vertices(&self) -> Vec<DVec3>;

    /// Issue the backend calls that draw this figure
    fn render(&self, backend: &mut dyn Backend, depthshade: bool) -> Result<(), RenderError>;
}

/// A drawable 3D primitive
#[enum_dispatch(Draw)]
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    PointSet(PointSet),
    Segment(Segment),
    Arrow(Arrow),
    Box(BoxFigure),
    Polygon(Polygon),
}

fn to_points(vectors: &[Vector]) -> Result<Vec<DVec3>, VectorError> {
    vectors.iter().map(DVec3::try_from).collect()
}

// ============================================================================
// Figure Types
// ============================================================================

/// Points drawn as dots
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    pub points: Vec<DVec3>,
    pub color: Color,
}

impl PointSet {
    pub fn new<P: Into<DVec3>>(points: impl IntoIterator<Item = P>) -> Self {
        PointSet {
            points: points.into_iter().map(Into::into).collect(),
            color: Color::Black,
        }
    }

    pub fn from_vectors(vectors: &[Vector]) -> Result<Self, VectorError> {
        Ok(PointSet::new(to_points(vectors)?))
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Draw for PointSet {
    fn vertices(&self) -> Vec<DVec3> {
        self.points.clone()
    }

    fn render(&self, backend: &mut dyn Backend, depthshade: bool) -> Result<(), RenderError> {
        if self.points.is_empty() {
            return Ok(());
        }
        backend.scatter(&self.points, self.color, Marker::Dot, depthshade)
    }
}

/// A straight line between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: DVec3,
    pub end: DVec3,
    pub color: Color,
    pub line_style: LineStyle,
}

impl Segment {
    pub fn new(start: impl Into<DVec3>, end: impl Into<DVec3>) -> Self {
        Segment {
            start: start.into(),
            end: end.into(),
            color: Color::Blue,
            line_style: LineStyle::Solid,
        }
    }

    pub fn from_vectors(start: &Vector, end: &Vector) -> Result<Self, VectorError> {
        Ok(Segment::new(start.to_dvec3()?, end.to_dvec3()?))
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }
}

impl Draw for Segment {
    fn vertices(&self) -> Vec<DVec3> {
        vec![self.start, self.end]
    }

    fn render(&self, backend: &mut dyn Backend, _depthshade: bool) -> Result<(), RenderError> {
        backend.line(self.start, self.end, &Stroke::new(self.color, self.line_style))
    }
}

/// An arrow from `tail` to `tip`. The tail defaults to the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub tip: DVec3,
    pub tail: DVec3,
    pub color: Color,
    pub line_style: LineStyle,
}

impl Arrow {
    pub fn new(tip: impl Into<DVec3>) -> Self {
        Arrow {
            tip: tip.into(),
            tail: DVec3::ZERO,
            color: Color::Red,
            line_style: LineStyle::Solid,
        }
    }

    pub fn from_vector(tip: &Vector) -> Result<Self, VectorError> {
        Ok(Arrow::new(tip.to_dvec3()?))
    }

    pub fn with_tail(mut self, tail: impl Into<DVec3>) -> Self {
        self.tail = tail.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }
}

impl Draw for Arrow {
    fn vertices(&self) -> Vec<DVec3> {
        vec![self.tip, self.tail]
    }

    fn render(&self, backend: &mut dyn Backend, _depthshade: bool) -> Result<(), RenderError> {
        backend.arrow(self.tail, self.tip, &Stroke::new(self.color, self.line_style))
    }
}

/// The box spanned by the origin and a corner point, drawn as the dashed
/// edges that project the corner onto the coordinate planes.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxFigure {
    pub corner: DVec3,
    pub color: Color,
    pub line_style: LineStyle,
}

impl BoxFigure {
    pub fn new(corner: impl Into<DVec3>) -> Self {
        BoxFigure {
            corner: corner.into(),
            color: Color::Gray,
            line_style: LineStyle::Dashed,
        }
    }

    pub fn from_vector(corner: &Vector) -> Result<Self, VectorError> {
        Ok(BoxFigure::new(corner.to_dvec3()?))
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// The nine edges not lying on a coordinate axis.
    pub fn edges(&self) -> [(DVec3, DVec3); 9] {
        let DVec3 { x, y, z } = self.corner;
        let p = DVec3::new;
        [
            (p(0.0, y, 0.0), p(x, y, 0.0)),
            (p(0.0, 0.0, z), p(0.0, y, z)),
            (p(0.0, 0.0, z), p(x, 0.0, z)),
            (p(0.0, y, 0.0), p(0.0, y, z)),
            (p(x, 0.0, 0.0), p(x, y, 0.0)),
            (p(x, 0.0, 0.0), p(x, 0.0, z)),
            (p(0.0, y, z), p(x, y, z)),
            (p(x, 0.0, z), p(x, y, z)),
            (p(x, y, 0.0), p(x, y, z)),
        ]
    }
}

impl Draw for BoxFigure {
    fn vertices(&self) -> Vec<DVec3> {
        vec![self.corner]
    }

    fn render(&self, backend: &mut dyn Backend, _depthshade: bool) -> Result<(), RenderError> {
        let stroke = Stroke::new(self.color, self.line_style);
        for (from, to) in self.edges() {
            backend.line(from, to, &stroke)?;
        }
        Ok(())
    }
}

/// A closed polygon through its vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<DVec3>,
    pub color: Color,
    pub line_style: LineStyle,
}

impl Polygon {
    pub fn new<P: Into<DVec3>>(vertices: impl IntoIterator<Item = P>) -> Self {
        Polygon {
            vertices: vertices.into_iter().map(Into::into).collect(),
            color: Color::Blue,
            line_style: LineStyle::Solid,
        }
    }

    pub fn from_vectors(vectors: &[Vector]) -> Result<Self, VectorError> {
        Ok(Polygon::new(to_points(vectors)?))
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }
}

impl Draw for Polygon {
    fn vertices(&self) -> Vec<DVec3> {
        self.vertices.clone()
    }

    fn render(&self, backend: &mut dyn Backend, _depthshade: bool) -> Result<(), RenderError> {
        let stroke = Stroke::new(self.color, self.line_style);
        let n = self.vertices.len();
        for i in 0..n {
            backend.line(self.vertices[i], self.vertices[(i + 1) % n], &stroke)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
