//! Presentation attributes: colors, line styles and strokes.

use std::fmt;

use super::defaults;

/// Figure colors. The named colors are the first entries of matplotlib's
/// default color cycle plus a few plain ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Black,
    Red,
    Green,
    Purple,
    Brown,
    Pink,
    Orange,
    Gray,
    Cyan,
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Blue => (0x1f, 0x77, 0xb4),
            Color::Black => (0x00, 0x00, 0x00),
            Color::Red => (0xd6, 0x27, 0x28),
            Color::Green => (0x2c, 0xa0, 0x2c),
            Color::Purple => (0x94, 0x67, 0xbd),
            Color::Brown => (0x8c, 0x56, 0x4b),
            Color::Pink => (0xe3, 0x77, 0xc2),
            Color::Orange => (0xff, 0x7f, 0x0e),
            Color::Gray => (0x80, 0x80, 0x80),
            Color::Cyan => (0x00, 0xbf, 0xbf),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

/// `#rrggbb`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Line styles for segments, arrows, boxes and polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    LooselyDotted,
    DenselyDotted,
    LooselyDashed,
    DenselyDashed,
}

impl LineStyle {
    /// On/off dash lengths in multiples of the stroke width; `None` is solid.
    pub fn dash_pattern(self) -> Option<&'static [f64]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some(&[3.7, 1.6]),
            LineStyle::Dotted => Some(&[1.0, 1.65]),
            LineStyle::DashDot => Some(&[6.4, 1.6, 1.0, 1.6]),
            LineStyle::LooselyDotted => Some(&[1.0, 10.0]),
            LineStyle::DenselyDotted => Some(&[1.0, 1.0]),
            LineStyle::LooselyDashed => Some(&[5.0, 10.0]),
            LineStyle::DenselyDashed => Some(&[5.0, 1.0]),
        }
    }
}

/// Everything needed to draw a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub style: LineStyle,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, style: LineStyle) -> Self {
        Stroke {
            color,
            style,
            width: defaults::STROKE_WIDTH,
        }
    }

    pub fn solid(color: Color) -> Self {
        Stroke::new(color, LineStyle::Solid)
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Dash pattern scaled to this stroke's width, as SVG `stroke-dasharray`
    /// lengths.
    pub fn dash_lengths(&self) -> Option<Vec<f64>> {
        self.style
            .dash_pattern()
            .map(|pattern| pattern.iter().map(|d| d * self.width).collect())
    }
}

/// Scatter marker shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    #[default]
    Dot,
    Cross,
}
