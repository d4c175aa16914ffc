//! Raster canvas with glyph paths, layered strokes and pixel filters.
//!
//! This crate draws onto a fixed-size RGBA surface without any windowing or
//! GPU dependency. It uses:
//! - `tiny-skia` for path filling, stroking and the pixel buffer
//! - `cosmic-text` for text shaping and glyph outlines
//! - `fontdb` for font discovery (system fonts, extra directories, font files)
//! - `image` and `png` for PNG decoding/encoding and the Gaussian blur filter
//!
//! Unlike an immediate-mode canvas, `fill()` and `stroke()` keep the current
//! path, so one text outline can be stroked several times and then filled.
//!
//! # Example
//!
//! ```rust,ignore
//! use neon_canvas::{CanvasColor, CanvasContext};
//!
//! let mut ctx = CanvasContext::new(400, 300)?;
//! ctx.set_fill_color(CanvasColor::rgb(0.0, 0.0, 0.0));
//! ctx.paint();
//! ctx.select_font_face(&["sans-serif"]);
//! ctx.set_font_size(48.0);
//! ctx.text_path("Hi", 20.0, 150.0)?;
//! ctx.set_stroke_color(CanvasColor::rgb(1.0, 0.2, 0.95));
//! ctx.set_line_width(6.0);
//! ctx.stroke();
//! ctx.set_fill_color(CanvasColor::rgb(1.0, 1.0, 1.0));
//! ctx.fill();
//! ctx.write_png("hi.png")?;
//! ```

mod context;
mod drawing_state;
mod error;
mod filter;
mod font_config;
mod font_face;
mod geometry;
mod style;
mod text;

// Re-export public API
pub use context::CanvasContext;
pub use drawing_state::DrawingState;
pub use error::{CanvasError, CanvasResult};
pub use font_config::{
    font_config_to_fontdb, CustomFont, FontConfig, GenericFamilyMap, ResolvedFontConfig,
};
pub use font_face::{is_generic_family, FontFace};
pub use geometry::{CanvasColor, RectParams, TextExtents};
pub use style::{LineCap, LineJoin};
