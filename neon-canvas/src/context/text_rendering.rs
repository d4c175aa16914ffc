//! Font selection, text measurement and glyph path operations for CanvasContext.

use super::CanvasContext;
use crate::error::CanvasResult;
use crate::font_face::FontFace;
use crate::geometry::TextExtents;

impl CanvasContext {
    /// Select the font families used for text, in order of preference.
    ///
    /// The current font size is kept.
    pub fn select_font_face<S: AsRef<str>>(&mut self, families: &[S]) {
        let size_px = self.state.font.size_px;
        self.state.font = FontFace {
            size_px,
            ..FontFace::new(families)
        };
    }

    /// Set the font size in pixels. Non-finite or non-positive sizes are ignored.
    pub fn set_font_size(&mut self, size_px: f32) {
        if size_px.is_finite() && size_px > 0.0 {
            self.state.font.size_px = size_px;
        }
    }

    /// Current font.
    pub fn font(&self) -> &FontFace {
        &self.state.font
    }

    /// Measure the ink extents of `text` in the current font.
    pub fn text_extents(&mut self, text: &str) -> CanvasResult<TextExtents> {
        crate::text::measure_text_extents(
            &mut self.font_system,
            &mut self.swash_cache,
            text,
            &self.state.font,
        )
    }

    /// Append the outline of `text` to the current path, with the baseline
    /// origin at (x, y).
    ///
    /// The text is set on one line; line breaks are drawn as spaces.
    pub fn text_path(&mut self, text: &str, x: f32, y: f32) -> CanvasResult<()> {
        log::debug!(target: "canvas", "textPath \"{}\" {} {}", text, x, y);
        crate::text::append_text_outline(
            &mut self.font_system,
            &mut self.swash_cache,
            &mut self.path_builder,
            text,
            &self.state.font,
            x,
            y,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::context::test_canvas;
    use crate::error::CanvasError;
    use crate::geometry::TextExtents;

    #[test]
    fn test_select_font_face_keeps_size() {
        let mut ctx = test_canvas(10, 10);
        ctx.set_font_size(42.0);
        ctx.select_font_face(&["Zapfino", "cursive"]);
        assert_eq!(ctx.font().size_px, 42.0);
        assert_eq!(ctx.font().families, vec!["Zapfino", "cursive"]);
    }

    #[test]
    fn test_font_size_ignore_invalid() {
        let mut ctx = test_canvas(10, 10);
        ctx.set_font_size(30.0);
        ctx.set_font_size(0.0);
        ctx.set_font_size(-4.0);
        ctx.set_font_size(f32::NAN);
        assert_eq!(ctx.font().size_px, 30.0);
    }

    #[test]
    fn test_missing_family_is_an_error() {
        let mut ctx = test_canvas(10, 10);
        ctx.select_font_face(&["Definitely Not Installed"]);
        assert!(matches!(
            ctx.text_extents("HELLO"),
            Err(CanvasError::FontNotFound(name)) if name == "Definitely Not Installed"
        ));
        assert!(matches!(
            ctx.text_path("HELLO", 0.0, 0.0),
            Err(CanvasError::FontNotFound(_))
        ));
    }

    #[test]
    fn test_empty_text_has_zero_extents() {
        let mut ctx = test_canvas(10, 10);
        ctx.select_font_face(&["sans-serif"]);
        assert_eq!(ctx.text_extents("").unwrap(), TextExtents::default());
        ctx.begin_path();
        ctx.text_path("", 5.0, 5.0).unwrap();
        assert!(!ctx.has_path());
    }

    #[test]
    fn test_text_without_fonts_has_no_outline() {
        let mut ctx = test_canvas(10, 10);
        ctx.select_font_face(&["cursive"]);
        ctx.set_font_size(50.0);
        assert_eq!(ctx.text_extents("HELLO").unwrap(), TextExtents::default());
        ctx.begin_path();
        ctx.text_path("HELLO", 0.0, 5.0).unwrap();
        assert!(!ctx.has_path());
    }
}
