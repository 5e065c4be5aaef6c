//! Plot ranges and the 3D → 2D camera projection

use glam::{DVec2, DVec3, dvec2};

use super::defaults;
use crate::types::{Degrees, Radians};

/// Closed interval along one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        AxisRange { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Finite with `min < max`
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((min, max): (f64, f64)) -> Self {
        AxisRange { min, max }
    }
}

/// Axis ranges of a scene, plus the raw extent of the data they were
/// computed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRanges {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
    /// Per-axis `max - min` of the data, origin included, before padding.
    pub span: DVec3,
}

/// Compute axis ranges that show every point and the origin.
///
/// Each axis is padded by 5% of its span (1 when the span is zero) and then
/// widened to cover at least `[-2, 2]`.
pub fn compute_plot_ranges(points: impl IntoIterator<Item = DVec3>) -> PlotRanges {
    let (lo, hi) = points
        .into_iter()
        .fold((DVec3::ZERO, DVec3::ZERO), |(lo, hi), p| (lo.min(p), hi.max(p)));

    let span = hi - lo;
    let padding = DVec3::select(
        span.cmpeq(DVec3::ZERO),
        DVec3::splat(defaults::ZERO_SPAN_PADDING),
        span * defaults::PADDING_RATIO,
    );
    let min = (lo - padding).min(DVec3::splat(-defaults::MIN_EXTENT));
    let max = (hi + padding).max(DVec3::splat(defaults::MIN_EXTENT));

    PlotRanges {
        x: AxisRange::new(min.x, max.x),
        y: AxisRange::new(min.y, max.y),
        z: AxisRange::new(min.z, max.z),
        span,
    }
}

/// "Nice" tick positions (steps of 1, 2 or 5 times a power of ten) inside
/// a range.
pub fn nice_ticks(range: AxisRange) -> Vec<f64> {
    if !range.is_valid() {
        return Vec::new();
    }
    let raw_step = range.span() / defaults::TARGET_TICKS;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let first = (range.min / step).ceil() as i64;
    let last = (range.max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Orthographic camera looking at the plot box.
///
/// Azimuth rotates about the z axis and elevation tilts toward it, the
/// convention matplotlib uses for `view_init`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    right: DVec3,
    up: DVec3,
    toward_viewer: DVec3,
}

impl Camera {
    pub fn new(elev: Degrees, azim: Degrees) -> Self {
        let (sin_e, cos_e) = Radians::from(elev).sin_cos();
        let (sin_a, cos_a) = Radians::from(azim).sin_cos();
        Camera {
            right: DVec3::new(-sin_a, cos_a, 0.0),
            up: DVec3::new(-sin_e * cos_a, -sin_e * sin_a, cos_e),
            toward_viewer: DVec3::new(cos_e * cos_a, cos_e * sin_a, sin_e),
        }
    }

    /// Screen position (y up) of a point in box space.
    pub fn project(&self, p: DVec3) -> DVec2 {
        dvec2(p.dot(self.right), p.dot(self.up))
    }

    /// Larger is closer to the viewer.
    pub fn depth(&self, p: DVec3) -> f64 {
        p.dot(self.toward_viewer)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(defaults::ELEV, defaults::AZIM)
    }
}

/// Maps data coordinates into the plot box: each axis range onto
/// `[-0.5, 0.5]`, with z squashed by the box aspect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxTransform {
    center: DVec3,
    scale: DVec3,
}

impl BoxTransform {
    pub fn new(x: AxisRange, y: AxisRange, z: AxisRange) -> Self {
        let extent = |r: AxisRange| if r.span() > 0.0 { r.span() } else { 1.0 };
        BoxTransform {
            center: DVec3::new(x.center(), y.center(), z.center()),
            scale: DVec3::new(
                1.0 / extent(x),
                1.0 / extent(y),
                defaults::BOX_ASPECT_Z / extent(z),
            ),
        }
    }

    pub fn apply(&self, p: DVec3) -> DVec3 {
        (p - self.center) * self.scale
    }
}
