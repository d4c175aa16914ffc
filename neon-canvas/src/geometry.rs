//! Value types passed to and returned from canvas operations.

/// Parameters for a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    /// X coordinate of the rectangle's top-left corner.
    pub x: f32,
    /// Y coordinate of the rectangle's top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

/// A solid color with floating-point channels, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl CanvasColor {
    pub const BLACK: CanvasColor = CanvasColor::rgb(0.0, 0.0, 0.0);

    /// Create an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with an explicit alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for CanvasColor {
    fn default() -> Self {
        CanvasColor::BLACK
    }
}

impl From<CanvasColor> for tiny_skia::Color {
    fn from(c: CanvasColor) -> Self {
        tiny_skia::Color::from_rgba(
            c.r.clamp(0.0, 1.0),
            c.g.clamp(0.0, 1.0),
            c.b.clamp(0.0, 1.0),
            c.a.clamp(0.0, 1.0),
        )
        .unwrap_or(tiny_skia::Color::BLACK)
    }
}

/// Ink extents of a run of text, measured on its glyph outlines.
///
/// Bearings are relative to the baseline origin the text would be drawn at,
/// so the glyph box spans `x_bearing..x_bearing + width` horizontally and
/// `y_bearing..y_bearing + height` vertically (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtents {
    pub x_bearing: f32,
    pub y_bearing: f32,
    pub width: f32,
    pub height: f32,
    /// Pen advance after the last glyph.
    pub x_advance: f32,
    pub y_advance: f32,
}
