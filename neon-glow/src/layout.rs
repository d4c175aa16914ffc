//! Font-size auto-fit and text centering.

use crate::error::NeonResult;
use neon_canvas::{CanvasContext, TextExtents};

pub const MIN_FONT_SIZE: u32 = 20;
pub const MAX_FONT_SIZE: u32 = 300;
pub const FONT_SIZE_STEP: u32 = 2;
/// Upper bound of the margin kept free around the text.
pub const MAX_PADDING: u32 = 120;

/// Bounds of the font-size search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitConfig {
    pub min_font_size: u32,
    pub max_font_size: u32,
    pub step: u32,
    pub max_padding: u32,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            min_font_size: MIN_FONT_SIZE,
            max_font_size: MAX_FONT_SIZE,
            step: FONT_SIZE_STEP,
            max_padding: MAX_PADDING,
        }
    }
}

impl FitConfig {
    /// Margin reserved at `font_size`: bigger text gets more room, up to `max_padding`.
    pub fn padding(&self, font_size: u32) -> u32 {
        self.max_padding.min(font_size)
    }
}

/// Result of fitting text onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    pub font_size: u32,
    /// Baseline origin that centers the glyph box on the canvas.
    pub x: f32,
    pub y: f32,
    /// Ink extents at `font_size`.
    pub extents: TextExtents,
}

/// Pick the largest font size whose text box fits the canvas minus padding,
/// and the origin that centers it.
///
/// Sizes are tried from `max_font_size` down in `step` decrements. When
/// nothing fits, `min_font_size` is used anyway. Leaves the canvas font size
/// set to the chosen size; the selected font face is used as is.
pub fn fit_text(ctx: &mut CanvasContext, text: &str, config: &FitConfig) -> NeonResult<TextLayout> {
    let (width, height) = (ctx.width() as f32, ctx.height() as f32);
    let fits = |extents: &TextExtents, font_size: u32| {
        let padding = config.padding(font_size) as f32;
        extents.width <= width - padding && extents.height <= height - padding
    };

    let step = config.step.max(1);
    let mut font_size = config.max_font_size;
    ctx.set_font_size(font_size as f32);
    let mut extents = ctx.text_extents(text)?;

    while !fits(&extents, font_size) && font_size > config.min_font_size {
        font_size = font_size.saturating_sub(step).max(config.min_font_size);
        ctx.set_font_size(font_size as f32);
        extents = ctx.text_extents(text)?;
    }

    if !fits(&extents, font_size) {
        log::warn!(
            "Text {:?} does not fit a {}x{} canvas, using minimum font size {}",
            text,
            ctx.width(),
            ctx.height(),
            font_size
        );
    }

    let x = width / 2.0 - (extents.width / 2.0 + extents.x_bearing);
    let y = height / 2.0 - (extents.height / 2.0 + extents.y_bearing);

    Ok(TextLayout {
        font_size,
        x,
        y,
        extents,
    })
}

/// Select `families`, fit `text`, and replace the current path with the
/// centered text outline.
pub fn prepare_text_path(
    ctx: &mut CanvasContext,
    text: &str,
    families: &[String],
    config: &FitConfig,
) -> NeonResult<TextLayout> {
    ctx.select_font_face(families);
    let layout = fit_text(ctx, text, config)?;

    ctx.begin_path();
    ctx.text_path(text, layout.x, layout.y)?;
    Ok(layout)
}
