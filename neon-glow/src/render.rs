//! The neon rendering pipeline.
//!
//! A run moves through three stages, each consuming the previous one:
//!
//! 1. [`GlowBase`]: background painted, text outlined with a thick shadow
//!    stroke and filled.
//! 2. [`BlurredBase`]: the glow base after a large Gaussian blur, so the
//!    shadow stroke turns into a soft halo.
//! 3. [`NeonImage`]: crisp text drawn over the halo with two glow rings and
//!    a solid fill.
//!
//! Both drawing stages fit the text on their own; the fit is deterministic,
//! so they agree on size and position.

use crate::error::NeonResult;
use crate::layout::{prepare_text_path, FitConfig, TextLayout};
use crate::params::{check_blur_radius, RenderParams};
use neon_canvas::{CanvasContext, ResolvedFontConfig};
use std::path::Path;

/// Narrowest shadow stroke of the glow base.
pub const MIN_SHADOW: f32 = 20.0;

/// Font size above which the glow rings get their wide widths.
const LARGE_TEXT_FONT_SIZE: u32 = 100;

/// Width of the shadow stroke drawn into the glow base.
pub fn shadow_width(font_size: u32) -> f32 {
    (font_size as f32 / 3.0).max(MIN_SHADOW)
}

/// Widths of the outer and inner glow rings.
pub fn glow_widths(font_size: u32) -> (f32, f32) {
    if font_size > LARGE_TEXT_FONT_SIZE {
        (10.0, 5.0)
    } else {
        (5.0, 2.0)
    }
}

/// Stage one: solid background plus the shadow-stroked, filled text.
pub struct GlowBase {
    canvas: CanvasContext,
    layout: TextLayout,
}

impl GlowBase {
    /// Paint the background, then stroke the text outline with the shadow
    /// color and fill it.
    pub fn draw(params: &RenderParams, fonts: &ResolvedFontConfig) -> NeonResult<Self> {
        let palette = &params.palette;
        let mut canvas = CanvasContext::with_resolved(params.width, params.height, fonts)?;

        canvas.set_fill_color(palette.background.into());
        canvas.paint();

        let layout = prepare_text_path(
            &mut canvas,
            &params.text,
            &params.font.families,
            &FitConfig::default(),
        )?;

        canvas.set_stroke_color(palette.shadow.into());
        canvas.set_line_width(shadow_width(layout.font_size));
        canvas.stroke();

        canvas.set_fill_color(palette.fill.into());
        canvas.fill();

        log::info!(
            "Glow base drawn: font size {}, origin ({:.1}, {:.1})",
            layout.font_size,
            layout.x,
            layout.y
        );
        Ok(Self { canvas, layout })
    }

    pub fn canvas(&self) -> &CanvasContext {
        &self.canvas
    }

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    /// Blur the whole surface with the given radius in pixels.
    pub fn blur(self, radius: f32) -> BlurredBase {
        let mut canvas = self.canvas;
        canvas.gaussian_blur(radius);
        log::info!("Glow base blurred with radius {}", radius);
        BlurredBase { canvas }
    }
}

/// Stage two: the blurred glow base, used as the backdrop of the final text.
pub struct BlurredBase {
    canvas: CanvasContext,
}

impl BlurredBase {
    /// Load a previously written blurred base from a PNG file.
    pub fn load(path: impl AsRef<Path>, fonts: &ResolvedFontConfig) -> NeonResult<Self> {
        let canvas = CanvasContext::from_png_file(path, fonts)?;
        Ok(Self { canvas })
    }

    pub fn canvas(&self) -> &CanvasContext {
        &self.canvas
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> NeonResult<()> {
        self.canvas.write_png(path)?;
        Ok(())
    }

    /// Draw the text over the blurred backdrop: outer glow ring, inner glow
    /// ring, then the fill, all on the same outline.
    pub fn draw_text(self, params: &RenderParams) -> NeonResult<NeonImage> {
        let palette = &params.palette;
        let mut canvas = self.canvas;

        let layout = prepare_text_path(
            &mut canvas,
            &params.text,
            &params.font.families,
            &FitConfig::default(),
        )?;
        let (outer, inner) = glow_widths(layout.font_size);

        canvas.set_stroke_color(palette.fg1.into());
        canvas.set_line_width(outer);
        canvas.stroke();

        canvas.set_stroke_color(palette.fg2.into());
        canvas.set_line_width(inner);
        canvas.stroke();

        canvas.set_fill_color(palette.fill.into());
        canvas.fill();

        log::info!("Text drawn with glow rings {} and {}", outer, inner);
        Ok(NeonImage { canvas, layout })
    }
}

/// Stage three: the finished image.
pub struct NeonImage {
    canvas: CanvasContext,
    layout: TextLayout,
}

impl NeonImage {
    pub fn canvas(&self) -> &CanvasContext {
        &self.canvas
    }

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    pub fn into_canvas(self) -> CanvasContext {
        self.canvas
    }

    /// Write the image as PNG, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> NeonResult<()> {
        self.canvas.write_png(path)?;
        Ok(())
    }
}

/// Run every stage and return the finished image without saving it.
///
/// With `write_intermediate` set, the blurred base is written to the output
/// path and read back before the text is drawn.
pub fn render(params: &RenderParams) -> NeonResult<NeonImage> {
    check_blur_radius(params.blur_radius)?;
    let fonts = params.font.to_font_config().resolve()?;
    log::info!(
        "Rendering {:?} on {}x{} with {} font faces",
        params.text,
        params.width,
        params.height,
        fonts.face_count()
    );

    let blurred = GlowBase::draw(params, &fonts)?.blur(params.blur_radius);

    let blurred = if params.write_intermediate {
        blurred.write_png(&params.output)?;
        BlurredBase::load(&params.output, &fonts)?
    } else {
        blurred
    };

    blurred.draw_text(params)
}

/// Render and write the final image to `params.output`.
pub fn render_to_file(params: &RenderParams) -> NeonResult<()> {
    let image = render(params)?;
    image.save(&params.output)?;
    log::info!("Wrote {}", params.output.display());
    Ok(())
}
