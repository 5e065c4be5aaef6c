//! SVG backend
//!
//! Geometry is recorded in data coordinates as it arrives and only projected
//! when the document is built, because the final axis limits may be set
//! after everything has been drawn.

use std::path::Path;

use facet_svg::{Circle, Group, Line, Polygon, Rect, SVG_NS, Svg, SvgNode, Text, facet_xml};
use glam::{DVec2, DVec3, dvec2};

use super::backend::Backend;
use super::defaults;
use super::geometry::{AxisRange, BoxTransform, Camera, nice_ticks};
use super::style::{Color, Marker, Stroke};
use crate::errors::RenderError;
use crate::types::Degrees;

#[derive(Debug, Clone)]
enum Primitive {
    Line {
        from: DVec3,
        to: DVec3,
        stroke: Stroke,
    },
    Arrow {
        tail: DVec3,
        tip: DVec3,
        stroke: Stroke,
    },
    Point {
        at: DVec3,
        color: Color,
        marker: Marker,
        alpha: f64,
    },
}

impl Primitive {
    fn anchor_points(&self) -> Vec<DVec3> {
        match self {
            Primitive::Line { from, to, .. } => vec![*from, *to],
            Primitive::Arrow { tail, tip, .. } => vec![*tail, *tip],
            Primitive::Point { at, .. } => vec![*at],
        }
    }
}

/// Renders scenes to an SVG document with an orthographic projection.
#[derive(Debug, Clone)]
pub struct SvgBackend {
    elev: Degrees,
    azim: Degrees,
    width: f64,
    height: f64,
    labels: [String; 3],
    limits: Option<[AxisRange; 3]>,
    ticks: Option<[Vec<f64>; 3]>,
    primitives: Vec<Primitive>,
    document: Option<String>,
}

impl Default for SvgBackend {
    fn default() -> Self {
        SvgBackend {
            elev: defaults::ELEV,
            azim: defaults::AZIM,
            width: defaults::CANVAS_WIDTH,
            height: defaults::CANVAS_HEIGHT,
            labels: Default::default(),
            limits: None,
            ticks: None,
            primitives: Vec::new(),
            document: None,
        }
    }
}

impl SvgBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the last `show`
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// The stored document, or a freshly built one if `show` never ran.
    pub fn into_document(self) -> Result<String, RenderError> {
        match self.document {
            Some(doc) => Ok(doc),
            None => self.to_svg(),
        }
    }

    /// Axis limits in effect: explicit ones, or the extent of everything
    /// drawn so far.
    fn effective_limits(&self) -> [AxisRange; 3] {
        if let Some(limits) = self.limits {
            return limits;
        }
        let mut lo = DVec3::splat(f64::INFINITY);
        let mut hi = DVec3::splat(f64::NEG_INFINITY);
        for p in self.primitives.iter().flat_map(Primitive::anchor_points) {
            lo = lo.min(p);
            hi = hi.max(p);
        }
        let axis = |lo: f64, hi: f64| {
            if !lo.is_finite() || !hi.is_finite() {
                AxisRange::new(-0.5, 0.5)
            } else if lo == hi {
                AxisRange::new(lo - 0.5, hi + 0.5)
            } else {
                AxisRange::new(lo, hi)
            }
        };
        [axis(lo.x, hi.x), axis(lo.y, hi.y), axis(lo.z, hi.z)]
    }

    /// Build the SVG document for the current state.
    pub fn to_svg(&self) -> Result<String, RenderError> {
        let limits = self.effective_limits();
        let view = View::new(
            Camera::new(self.elev, self.azim),
            BoxTransform::new(limits[0], limits[1], limits[2]),
            self.width * defaults::PX_PER_INCH,
            self.height * defaults::PX_PER_INCH,
        );

        let mut children = vec![
            SvgNode::Rect(Rect {
                x: Some(0.0),
                y: Some(0.0),
                width: Some(round_sig(view.width)),
                height: Some(round_sig(view.height)),
                fill: Some("white".to_string()),
            }),
            self.frame(&view, &limits),
            self.tick_labels(&view, &limits),
        ];
        children.extend(self.axis_labels(&view, &limits));

        // Painter's order: farthest first.
        let mut order: Vec<(f64, &Primitive)> = self
            .primitives
            .iter()
            .map(|p| {
                let pts = p.anchor_points();
                let depth = pts.iter().map(|q| view.depth(*q)).sum::<f64>() / pts.len() as f64;
                (depth, p)
            })
            .collect();
        order.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, primitive) in &order {
            children.extend(primitive_nodes(&view, primitive));
        }

        let svg = Svg {
            xmlns: Some(SVG_NS.to_string()),
            width: Some(fmt_num(view.width)),
            height: Some(fmt_num(view.height)),
            view_box: Some(format!("0 0 {} {}", fmt_num(view.width), fmt_num(view.height))),
            children,
        };
        let out = facet_xml::to_string(&svg).map_err(|e| RenderError::Svg {
            message: e.to_string(),
        })?;

        crate::log::debug!(
            primitives = self.primitives.len(),
            bytes = out.len(),
            "built svg document"
        );
        Ok(out)
    }

    /// The twelve edges of the plot box
    fn frame(&self, view: &View, limits: &[AxisRange; 3]) -> SvgNode {
        let [x, y, z] = *limits;
        let corner = |i: usize| {
            DVec3::new(
                if i & 1 == 0 { x.min } else { x.max },
                if i & 2 == 0 { y.min } else { y.max },
                if i & 4 == 0 { z.min } else { z.max },
            )
        };
        let mut edges = Vec::with_capacity(12);
        for i in 0..8usize {
            for bit in [1usize, 2, 4] {
                if i & bit == 0 {
                    let a = view.to_screen(corner(i));
                    let b = view.to_screen(corner(i | bit));
                    edges.push(SvgNode::Line(Line {
                        x1: Some(round_sig(a.x)),
                        y1: Some(round_sig(a.y)),
                        x2: Some(round_sig(b.x)),
                        y2: Some(round_sig(b.y)),
                        stroke_width: Some(fmt_num(defaults::FRAME_STROKE_WIDTH)),
                        ..Default::default()
                    }));
                }
            }
        }
        SvgNode::G(Group {
            class: Some("frame".to_string()),
            fill: Some("none".to_string()),
            stroke: Some("lightgray".to_string()),
            children: edges,
            ..Default::default()
        })
    }

    /// Tick labels along the x, y and z edges nearest the bottom of the box
    fn tick_labels(&self, view: &View, limits: &[AxisRange; 3]) -> SvgNode {
        let [x, y, z] = *limits;
        let ticks = match &self.ticks {
            Some(ticks) => ticks.clone(),
            None => [nice_ticks(x), nice_ticks(y), nice_ticks(z)],
        };
        let anchors: [Box<dyn Fn(f64) -> DVec3>; 3] = [
            Box::new(|t| DVec3::new(t, y.min, z.min)),
            Box::new(|t| DVec3::new(x.max, t, z.min)),
            Box::new(|t| DVec3::new(x.min, y.max, t)),
        ];
        let offsets = [dvec2(0.0, 14.0), dvec2(10.0, 10.0), dvec2(-8.0, 4.0)];

        let mut labels = Vec::new();
        for ((values, anchor), offset) in ticks.iter().zip(&anchors).zip(offsets) {
            for &t in values {
                let p = view.to_screen(anchor(t)) + offset;
                labels.push(SvgNode::Text(Text {
                    x: Some(round_sig(p.x)),
                    y: Some(round_sig(p.y)),
                    content: fmt_num(t),
                    ..Default::default()
                }));
            }
        }
        SvgNode::G(Group {
            class: Some("ticks".to_string()),
            fill: Some("dimgray".to_string()),
            font_family: Some("sans-serif".to_string()),
            font_size: Some(fmt_num(defaults::FONT_SIZE * 0.8)),
            text_anchor: Some("middle".to_string()),
            children: labels,
            ..Default::default()
        })
    }

    fn axis_labels(&self, view: &View, limits: &[AxisRange; 3]) -> Vec<SvgNode> {
        let [x, y, z] = *limits;
        let anchors = [
            DVec3::new(x.center(), y.min, z.min),
            DVec3::new(x.max, y.center(), z.min),
            DVec3::new(x.min, y.max, z.center()),
        ];
        let offsets = [dvec2(0.0, 30.0), dvec2(28.0, 24.0), dvec2(-24.0, 0.0)];
        self.labels
            .iter()
            .zip(anchors)
            .zip(offsets)
            .filter(|((label, _), _)| !label.is_empty())
            .map(|((label, anchor), offset)| {
                let p = view.to_screen(anchor) + offset;
                SvgNode::Text(Text {
                    x: Some(round_sig(p.x)),
                    y: Some(round_sig(p.y)),
                    font_family: Some("sans-serif".to_string()),
                    font_size: Some(fmt_num(defaults::FONT_SIZE)),
                    text_anchor: Some("middle".to_string()),
                    content: label.clone(),
                })
            })
            .collect()
    }
}

impl Backend for SvgBackend {
    fn set_view(&mut self, elev: Option<Degrees>, azim: Option<Degrees>) -> Result<(), RenderError> {
        self.elev = elev.unwrap_or(defaults::ELEV);
        self.azim = azim.unwrap_or(defaults::AZIM);
        Ok(())
    }

    fn set_axis_labels(&mut self, x: &str, y: &str, z: &str) -> Result<(), RenderError> {
        self.labels = [x.to_string(), y.to_string(), z.to_string()];
        Ok(())
    }

    fn set_size(&mut self, width: f64, height: f64) -> Result<(), RenderError> {
        for value in [width, height] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RenderError::InvalidWidth { value });
            }
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn line(&mut self, from: DVec3, to: DVec3, stroke: &Stroke) -> Result<(), RenderError> {
        self.primitives.push(Primitive::Line {
            from,
            to,
            stroke: *stroke,
        });
        Ok(())
    }

    fn scatter(
        &mut self,
        points: &[DVec3],
        color: Color,
        marker: Marker,
        depthshade: bool,
    ) -> Result<(), RenderError> {
        let alphas = if depthshade {
            depth_alphas(&Camera::new(self.elev, self.azim), points)
        } else {
            vec![1.0; points.len()]
        };
        for (&at, alpha) in points.iter().zip(alphas) {
            self.primitives.push(Primitive::Point {
                at,
                color,
                marker,
                alpha,
            });
        }
        Ok(())
    }

    fn arrow(&mut self, tail: DVec3, tip: DVec3, stroke: &Stroke) -> Result<(), RenderError> {
        self.primitives.push(Primitive::Arrow {
            tail,
            tip,
            stroke: *stroke,
        });
        Ok(())
    }

    fn set_limits(&mut self, x: AxisRange, y: AxisRange, z: AxisRange) -> Result<(), RenderError> {
        for (axis, range) in [('x', x), ('y', y), ('z', z)] {
            if !range.is_valid() {
                return Err(RenderError::InvalidLimits { axis });
            }
        }
        self.limits = Some([x, y, z]);
        Ok(())
    }

    fn set_ticks(&mut self, x: &[f64], y: &[f64], z: &[f64]) -> Result<(), RenderError> {
        self.ticks = Some([x.to_vec(), y.to_vec(), z.to_vec()]);
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), RenderError> {
        let svg = self.to_svg()?;
        std::fs::write(path, &svg).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        crate::log::info!(path = %path.display(), bytes = svg.len(), "saved svg");
        Ok(())
    }

    fn show(&mut self) -> Result<(), RenderError> {
        self.document = Some(self.to_svg()?);
        Ok(())
    }
}

/// Fade points with depth: the nearest is opaque, the farthest is drawn at
/// the minimum alpha. Depth is measured in data space, which is close
/// enough for a visual cue.
fn depth_alphas(camera: &Camera, points: &[DVec3]) -> Vec<f64> {
    let depths: Vec<f64> = points.iter().map(|p| camera.depth(*p)).collect();
    let near = depths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let far = depths.iter().copied().fold(f64::INFINITY, f64::min);
    let range = near - far;
    depths
        .iter()
        .map(|d| {
            if range > 0.0 {
                let t = (d - far) / range;
                defaults::DEPTHSHADE_MIN_ALPHA + (1.0 - defaults::DEPTHSHADE_MIN_ALPHA) * t
            } else {
                1.0
            }
        })
        .collect()
}

/// Data space → screen pixels (y down)
struct View {
    camera: Camera,
    transform: BoxTransform,
    width: f64,
    height: f64,
    scale: f64,
    center: DVec2,
}

impl View {
    fn new(camera: Camera, transform: BoxTransform, width: f64, height: f64) -> Self {
        // Fit the projected unit box into the canvas.
        let mut lo = DVec2::splat(f64::INFINITY);
        let mut hi = DVec2::splat(f64::NEG_INFINITY);
        for i in 0..8 {
            let corner = DVec3::new(
                if i & 1 == 0 { -0.5 } else { 0.5 },
                if i & 2 == 0 { -0.5 } else { 0.5 },
                (if i & 4 == 0 { -0.5 } else { 0.5 }) * defaults::BOX_ASPECT_Z,
            );
            let p = camera.project(corner);
            lo = lo.min(p);
            hi = hi.max(p);
        }
        let extent = (hi - lo).max(DVec2::splat(1e-9));
        let scale = (width * defaults::PLOT_FILL / extent.x).min(height * defaults::PLOT_FILL / extent.y);
        View {
            camera,
            transform,
            width,
            height,
            scale,
            center: (lo + hi) / 2.0,
        }
    }

    fn to_screen(&self, p: DVec3) -> DVec2 {
        let q = (self.camera.project(self.transform.apply(p)) - self.center) * self.scale;
        dvec2(self.width / 2.0 + q.x, self.height / 2.0 - q.y)
    }

    fn depth(&self, p: DVec3) -> f64 {
        self.camera.depth(self.transform.apply(p))
    }
}

fn stroked_line(from: DVec2, to: DVec2, stroke: &Stroke) -> Line {
    Line {
        x1: Some(round_sig(from.x)),
        y1: Some(round_sig(from.y)),
        x2: Some(round_sig(to.x)),
        y2: Some(round_sig(to.y)),
        stroke: Some(stroke.color.to_string()),
        stroke_width: Some(fmt_num(stroke.width)),
        stroke_dasharray: stroke.dash_lengths().map(|dashes| {
            dashes.into_iter().map(fmt_num).collect::<Vec<_>>().join(",")
        }),
        stroke_opacity: None,
    }
}

fn primitive_nodes(view: &View, primitive: &Primitive) -> Vec<SvgNode> {
    match primitive {
        Primitive::Line { from, to, stroke } => {
            let line = stroked_line(view.to_screen(*from), view.to_screen(*to), stroke);
            vec![SvgNode::Line(line)]
        }
        Primitive::Arrow { tail, tip, stroke } => {
            let start = view.to_screen(*tail);
            let end = view.to_screen(*tip);
            let head = arrowhead(start, end, defaults::ARROW_HEAD_LENGTH, defaults::ARROW_HEAD_WIDTH);
            // The shaft stops at the head's base so dashes don't poke through.
            let shaft_end = head.as_ref().map_or(end, |h| h.base);
            let mut nodes = vec![SvgNode::Line(stroked_line(start, shaft_end, stroke))];
            if let Some(head) = head {
                let points: Vec<String> = head
                    .points
                    .iter()
                    .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
                    .collect();
                nodes.push(SvgNode::Polygon(Polygon {
                    points: Some(points.join(" ")),
                    fill: Some(stroke.color.to_string()),
                }));
            }
            nodes
        }
        Primitive::Point {
            at,
            color,
            marker,
            alpha,
        } => {
            let c = view.to_screen(*at);
            let opacity = (*alpha < 1.0).then(|| round_sig(*alpha));
            match marker {
                Marker::Dot => vec![SvgNode::Circle(Circle {
                    cx: Some(round_sig(c.x)),
                    cy: Some(round_sig(c.y)),
                    r: Some(defaults::POINT_RADIUS),
                    fill: Some(color.to_string()),
                    fill_opacity: opacity,
                })],
                Marker::Cross => {
                    let s = defaults::CROSS_HALF_SIZE;
                    let stroke = Stroke::solid(*color);
                    [(dvec2(-s, -s), dvec2(s, s)), (dvec2(-s, s), dvec2(s, -s))]
                        .into_iter()
                        .map(|(a, b)| {
                            SvgNode::Line(Line {
                                stroke_opacity: opacity,
                                ..stroked_line(c + a, c + b, &stroke)
                            })
                        })
                        .collect()
                }
            }
        }
    }
}

struct Arrowhead {
    base: DVec2,
    points: [DVec2; 3],
}

/// Triangle at `end` pointing away from `start`. `None` for arrows too
/// short on screen to have a direction.
fn arrowhead(start: DVec2, end: DVec2, head_len: f64, head_width: f64) -> Option<Arrowhead> {
    let delta = end - start;
    let len = delta.length();
    if len < 0.001 {
        return None;
    }
    let unit = delta / len;
    let perp = dvec2(-unit.y, unit.x);
    // Never let the head overshoot the tail.
    let base = end - unit * head_len.min(len);
    let half_width = head_width / 2.0;
    Some(Arrowhead {
        base,
        points: [end, base + perp * half_width, base - perp * half_width],
    })
}

const SIG_FIGS: i32 = 6;

/// Round to six significant figures. Non-finite values and `-0` become 0.
fn round_sig(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return 0.0;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let shift = SIG_FIGS - 1 - magnitude;
    // Keep the power of ten an exact integer on both sides of the point.
    let rounded = if shift >= 0 {
        let scale = 10_f64.powi(shift);
        if !scale.is_finite() {
            return value;
        }
        (value * scale).round() / scale
    } else {
        let scale = 10_f64.powi(-shift);
        (value / scale).round() * scale
    };
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format a number with at most 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = round_sig(value);
    if rounded == 0.0 {
        return "0".to_string();
    }
    let magnitude = rounded.abs().log10().floor() as i32;
    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
