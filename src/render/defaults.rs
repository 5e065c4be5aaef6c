//! Default sizes and settings (canvas sizes in inches, drawing sizes in px)

use crate::types::Degrees;

/// Canvas width `draw3d` sizes the figure to when the data allows it.
pub const SCENE_WIDTH: f64 = 6.0;
/// Canvas size used until `set_size` is called.
pub const CANVAS_WIDTH: f64 = 6.4;
pub const CANVAS_HEIGHT: f64 = 4.8;
pub const PX_PER_INCH: f64 = 72.0;

pub const AZIM: Degrees = Degrees(-60.0);
pub const ELEV: Degrees = Degrees(30.0);

/// Relative z extent of the plot box (x and y are 1).
pub const BOX_ASPECT_Z: f64 = 0.75;
/// Share of the canvas the projected plot box may occupy.
pub const PLOT_FILL: f64 = 0.8;

/// Plot ranges always cover at least `[-MIN_EXTENT, MIN_EXTENT]`.
pub const MIN_EXTENT: f64 = 2.0;
pub const PADDING_RATIO: f64 = 0.05;
pub const ZERO_SPAN_PADDING: f64 = 1.0;

pub const STROKE_WIDTH: f64 = 1.5;
pub const FRAME_STROKE_WIDTH: f64 = 0.5;
pub const POINT_RADIUS: f64 = 2.5;
pub const CROSS_HALF_SIZE: f64 = 3.5;
pub const ARROW_HEAD_LENGTH: f64 = 10.0;
pub const ARROW_HEAD_WIDTH: f64 = 7.0;
pub const FONT_SIZE: f64 = 10.0;
pub const TARGET_TICKS: f64 = 6.0;
/// Opacity of the farthest point when depth shading is on.
pub const DEPTHSHADE_MIN_ALPHA: f64 = 0.3;
