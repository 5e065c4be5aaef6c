//! The plotting surface a scene is drawn onto.

use std::path::Path;

use glam::DVec3;

use super::geometry::AxisRange;
use super::style::{Color, Marker, Stroke};
use crate::errors::RenderError;
use crate::types::Degrees;

/// A 3D plotting backend.
///
/// [`draw3d`](super::draw3d) issues calls in a fixed order: view and labels,
/// size, geometry (lines, scatters, arrows) in figure order, then limits,
/// ticks, `save` and finally `show`. Coordinates are data coordinates; the
/// backend owns projection and layout.
///
/// Every call may fail. Errors are propagated to the caller of `draw3d`
/// unchanged.
pub trait Backend {
    /// Camera elevation and azimuth; `None` keeps the backend's default.
    fn set_view(&mut self, elev: Option<Degrees>, azim: Option<Degrees>) -> Result<(), RenderError>;

    fn set_axis_labels(&mut self, x: &str, y: &str, z: &str) -> Result<(), RenderError>;

    /// Canvas size in inches.
    fn set_size(&mut self, width: f64, height: f64) -> Result<(), RenderError>;

    fn line(&mut self, from: DVec3, to: DVec3, stroke: &Stroke) -> Result<(), RenderError>;

    /// Draw markers at each point. With `depthshade`, points farther from
    /// the viewer are drawn fainter.
    fn scatter(
        &mut self,
        points: &[DVec3],
        color: Color,
        marker: Marker,
        depthshade: bool,
    ) -> Result<(), RenderError>;

    /// A straight arrow from `tail` with its head at `tip`.
    fn arrow(&mut self, tail: DVec3, tip: DVec3, stroke: &Stroke) -> Result<(), RenderError>;

    fn set_limits(&mut self, x: AxisRange, y: AxisRange, z: AxisRange) -> Result<(), RenderError>;

    fn set_ticks(&mut self, x: &[f64], y: &[f64], z: &[f64]) -> Result<(), RenderError>;

    /// Write the current canvas to `path`.
    fn save(&mut self, path: &Path) -> Result<(), RenderError>;

    /// Present the finished canvas.
    fn show(&mut self) -> Result<(), RenderError>;
}
