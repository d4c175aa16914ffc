//! Drawing state applied by fill, stroke and text operations.

use crate::font_face::FontFace;
use crate::geometry::CanvasColor;
use crate::style::{LineCap, LineJoin};

/// Current paint and stroke parameters of a canvas.
#[derive(Debug, Clone)]
pub struct DrawingState {
    /// Color used by `fill()` and `paint()`.
    pub fill_color: CanvasColor,
    /// Color used by `stroke()`.
    pub stroke_color: CanvasColor,
    pub line_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub miter_limit: f32,
    /// Font used to measure and outline text.
    pub font: FontFace,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            fill_color: CanvasColor::BLACK,
            stroke_color: CanvasColor::BLACK,
            line_width: 1.0,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            miter_limit: 10.0,
            font: FontFace::default(),
        }
    }
}

impl DrawingState {
    pub(crate) fn to_stroke(&self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: self.line_width,
            line_cap: self.line_cap.into(),
            line_join: self.line_join.into(),
            miter_limit: self.miter_limit,
            dash: None,
        }
    }
}
