//! Canvas rendering context implementation.

mod drawing;
mod image_ops;
mod path_ops;
mod text_rendering;

use crate::drawing_state::DrawingState;
use crate::error::{CanvasError, CanvasResult};
use crate::font_config::{font_config_to_fontdb, FontConfig, ResolvedFontConfig};
use crate::geometry::CanvasColor;
use crate::style::{LineCap, LineJoin};
use cosmic_text::{FontSystem, SwashCache};
use tiny_skia::Pixmap;

/// Maximum canvas dimension.
const MAX_DIMENSION: u32 = 32767;

/// A raster surface plus the state needed to draw paths and text onto it.
///
/// The current path survives `fill()` and `stroke()`, so one path can be
/// stroked several times and filled without being rebuilt.
pub struct CanvasContext {
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// Pixel buffer (premultiplied RGBA).
    pub(crate) pixmap: Pixmap,
    /// Font system for text shaping.
    pub(crate) font_system: FontSystem,
    /// Swash cache for glyph outlines.
    pub(crate) swash_cache: SwashCache,
    pub(crate) state: DrawingState,
    /// Current path builder.
    pub(crate) path_builder: tiny_skia::PathBuilder,
}

impl CanvasContext {
    /// Create a new canvas with the specified dimensions.
    ///
    /// Uses `FontConfig::default()`, which loads system fonts.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        Self::with_config(width, height, FontConfig::default())
    }

    /// Create a new canvas with the specified dimensions and font configuration.
    pub fn with_config(width: u32, height: u32, config: FontConfig) -> CanvasResult<Self> {
        validate_dimensions(width, height)?;
        Self::new_internal(width, height, font_config_to_fontdb(&config)?)
    }

    /// Create a new canvas using a pre-resolved font configuration.
    ///
    /// Clones the cached font database instead of scanning the system again.
    pub fn with_resolved(
        width: u32,
        height: u32,
        resolved: &ResolvedFontConfig,
    ) -> CanvasResult<Self> {
        validate_dimensions(width, height)?;
        Self::new_internal(width, height, resolved.fontdb.clone())
    }

    fn new_internal(width: u32, height: u32, font_db: fontdb::Database) -> CanvasResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;

        let font_system = FontSystem::new_with_locale_and_db("en".to_string(), font_db);

        Ok(Self {
            width,
            height,
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
            state: DrawingState::default(),
            path_builder: tiny_skia::PathBuilder::new(),
        })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current drawing state.
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    // --- Style setters ---

    /// Set the color used by `fill()` and `paint()`.
    pub fn set_fill_color(&mut self, color: CanvasColor) {
        self.state.fill_color = color;
    }

    /// Set the color used by `stroke()`.
    pub fn set_stroke_color(&mut self, color: CanvasColor) {
        self.state.stroke_color = color;
    }

    /// Set the line width. Non-finite or non-positive values are ignored.
    pub fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    pub fn set_line_join(&mut self, join: LineJoin) {
        self.state.line_join = join;
    }

    /// Set the miter limit. Non-finite or non-positive values are ignored.
    pub fn set_miter_limit(&mut self, limit: f32) {
        if limit.is_finite() && limit > 0.0 {
            self.state.miter_limit = limit;
        }
    }
}

fn validate_dimensions(width: u32, height: u32) -> CanvasResult<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(CanvasError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_canvas(width: u32, height: u32) -> CanvasContext {
    let config = FontConfig {
        load_system_fonts: false,
        ..FontConfig::default()
    };
    CanvasContext::with_config(width, height, config).unwrap()
}
