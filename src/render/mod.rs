//! 3D scene rendering
//!
//! This module is organized into submodules:
//! - `figures`: The drawable primitives and the `Draw` trait
//! - `style`: Colors, line styles, strokes and markers
//! - `geometry`: Plot ranges, ticks and the camera projection
//! - `backend`: The `Backend` trait a scene is drawn onto
//! - `svg`: An SVG implementation of `Backend`
//! - `defaults`: Default sizes and settings

pub mod backend;
pub mod defaults;
pub mod figures;
pub mod geometry;
pub mod style;
pub mod svg;

use std::path::{Path, PathBuf};

use glam::DVec3;

pub use backend::Backend;
pub use figures::{Arrow, BoxFigure, Draw, Figure, PointSet, Polygon, Segment};
pub use geometry::{AxisRange, PlotRanges, compute_plot_ranges};
pub use style::{Color, LineStyle, Marker, Stroke};
pub use svg::SvgBackend;

use crate::errors::RenderError;
use crate::types::Degrees;

/// Display options for [`draw3d`]
#[derive(Debug, Clone, PartialEq)]
pub struct Draw3dOptions {
    /// Mark the origin with a black cross
    pub origin: bool,
    /// Draw the coordinate axes across the plot ranges
    pub axes: bool,
    /// Canvas width in inches
    pub width: f64,
    pub save_as: Option<PathBuf>,
    pub azim: Option<Degrees>,
    pub elev: Option<Degrees>,
    pub xlim: Option<AxisRange>,
    pub ylim: Option<AxisRange>,
    pub zlim: Option<AxisRange>,
    pub xticks: Option<Vec<f64>>,
    pub yticks: Option<Vec<f64>>,
    pub zticks: Option<Vec<f64>>,
    /// Fade scattered points with distance from the viewer
    pub depthshade: bool,
}

impl Default for Draw3dOptions {
    fn default() -> Self {
        Draw3dOptions {
            origin: true,
            axes: true,
            width: defaults::SCENE_WIDTH,
            save_as: None,
            azim: None,
            elev: None,
            xlim: None,
            ylim: None,
            zlim: None,
            xticks: None,
            yticks: None,
            zticks: None,
            depthshade: false,
        }
    }
}

impl Draw3dOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, origin: bool) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn save_as(mut self, path: impl AsRef<Path>) -> Self {
        self.save_as = Some(path.as_ref().to_path_buf());
        self
    }

    /// Camera elevation and azimuth
    pub fn with_view(mut self, elev: impl Into<Degrees>, azim: impl Into<Degrees>) -> Self {
        self.elev = Some(elev.into());
        self.azim = Some(azim.into());
        self
    }

    pub fn with_limits(
        mut self,
        x: impl Into<AxisRange>,
        y: impl Into<AxisRange>,
        z: impl Into<AxisRange>,
    ) -> Self {
        self.xlim = Some(x.into());
        self.ylim = Some(y.into());
        self.zlim = Some(z.into());
        self
    }

    pub fn with_ticks(mut self, x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        self.xticks = Some(x);
        self.yticks = Some(y);
        self.zticks = Some(z);
        self
    }

    pub fn with_depthshade(mut self, depthshade: bool) -> Self {
        self.depthshade = depthshade;
        self
    }
}

/// Draw `figures` onto `backend`.
///
/// Axis ranges are computed from every figure's coordinates and the origin,
/// then the origin marker, axes and figures are drawn in that order. Explicit
/// limits and ticks are applied only when given for all three axes.
pub fn draw3d(
    figures: &[Figure],
    options: &Draw3dOptions,
    backend: &mut dyn Backend,
) -> Result<(), RenderError> {
    if !options.width.is_finite() || options.width <= 0.0 {
        return Err(RenderError::InvalidWidth {
            value: options.width,
        });
    }

    backend.set_view(options.elev, options.azim)?;

    let mut vertices: Vec<DVec3> = figures.iter().flat_map(|f| f.vertices()).collect();
    if options.origin {
        vertices.push(DVec3::ZERO);
    }
    let ranges = compute_plot_ranges(vertices);
    crate::log::debug!(
        figures = figures.len(),
        x = ?ranges.x,
        y = ?ranges.y,
        z = ?ranges.z,
        "computed plot ranges"
    );

    backend.set_axis_labels("x", "y", "z")?;

    // A flat or extremely thin scene keeps the backend's default size.
    let height = options.width * ranges.span.x / ranges.span.y;
    if height.is_finite() && height > 0.0 {
        backend.set_size(options.width, height)?;
    } else {
        crate::log::debug!(span = ?ranges.span, "canvas size left at default");
    }

    if options.axes {
        let stroke = Stroke::solid(Color::Black);
        let PlotRanges { x, y, z, .. } = ranges;
        backend.line(DVec3::new(x.min, 0.0, 0.0), DVec3::new(x.max, 0.0, 0.0), &stroke)?;
        backend.line(DVec3::new(0.0, y.min, 0.0), DVec3::new(0.0, y.max, 0.0), &stroke)?;
        backend.line(DVec3::new(0.0, 0.0, z.min), DVec3::new(0.0, 0.0, z.max), &stroke)?;
    }

    if options.origin {
        backend.scatter(&[DVec3::ZERO], Color::Black, Marker::Cross, false)?;
    }

    for figure in figures {
        figure.render(backend, options.depthshade)?;
    }

    match (options.xlim, options.ylim, options.zlim) {
        (Some(x), Some(y), Some(z)) => backend.set_limits(x, y, z)?,
        (None, None, None) => {}
        _ => {
            crate::log::warn!("axis limits ignored: xlim, ylim and zlim must all be given");
        }
    }

    match (&options.xticks, &options.yticks, &options.zticks) {
        (Some(x), Some(y), Some(z)) => backend.set_ticks(x, y, z)?,
        (None, None, None) => {}
        _ => {
            crate::log::warn!("axis ticks ignored: xticks, yticks and zticks must all be given");
        }
    }

    if let Some(path) = &options.save_as {
        backend.save(path)?;
        crate::log::info!(path = %path.display(), "scene saved");
    }

    backend.show()
}

/// Draw `figures` with a fresh [`SvgBackend`] and return the document.
pub fn render_svg(figures: &[Figure], options: &Draw3dOptions) -> Result<String, RenderError> {
    let mut backend = SvgBackend::new();
    draw3d(figures, options, &mut backend)?;
    backend.into_document()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = Draw3dOptions::default();
        assert!(options.origin);
        assert!(options.axes);
        assert_eq!(options.width, 6.0);
        assert!(!options.depthshade);
        assert_eq!(options.save_as, None);
    }

    #[test]
    fn builders_set_all_axes() {
        let options = Draw3dOptions::new()
            .with_limits((-1.0, 1.0), (-2.0, 2.0), (0.0, 3.0))
            .with_view(Degrees(10.0), Degrees(20.0));
        assert_eq!(options.ylim, Some(AxisRange::new(-2.0, 2.0)));
        assert_eq!(options.elev, Some(Degrees(10.0)));
        assert_eq!(options.azim, Some(Degrees(20.0)));
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = render_svg(&[], &Draw3dOptions::new().with_width(0.0)).unwrap_err();
        assert!(matches!(err, RenderError::InvalidWidth { value } if value == 0.0));
    }

    #[test]
    fn empty_scene_renders() {
        let svg = render_svg(&[], &Draw3dOptions::new().with_origin(false)).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn thin_scene_keeps_default_canvas() {
        // The y span is so small next to x that the height would overflow.
        let segment = Segment::new([0.0, 0.0, 0.0], [1e300, 1e-10, 0.0]);
        let options = Draw3dOptions::new().with_origin(false).with_axes(false);
        let svg = render_svg(&[segment.into()], &options).unwrap();
        assert!(svg.contains(r#"width="460.8" height="345.6""#));
    }
}
