//! Text shaping and glyph outline extraction using cosmic-text.

use crate::error::{CanvasError, CanvasResult};
use crate::font_face::{resolve_family, to_cosmic_family, FontFace};
use crate::geometry::TextExtents;
use cosmic_text::{Attrs, Buffer, CacheKeyFlags, Command, FontSystem, Metrics, Shaping, SwashCache};
use std::borrow::Cow;

/// Shape `text` with `font` and append every glyph outline to `path_builder`,
/// with the baseline at (`x`, `y`).
///
/// Text is always set on a single line: line breaks are shaped as spaces.
/// Returns the pen advance.
pub(crate) fn append_text_outline(
    font_system: &mut FontSystem,
    swash_cache: &mut SwashCache,
    path_builder: &mut tiny_skia::PathBuilder,
    text: &str,
    font: &FontFace,
    x: f32,
    y: f32,
) -> CanvasResult<f32> {
    let family = resolve_family(font_system.db(), &font.families)
        .ok_or_else(|| CanvasError::FontNotFound(font.families.join(", ")))?;

    // Shaping needs at least one face to fall back on.
    if text.is_empty() || font_system.db().is_empty() {
        if !text.is_empty() {
            log::warn!("No fonts available, \"{}\" has no outline", text);
        }
        return Ok(0.0);
    }

    let text = single_line(text);
    let metrics = Metrics::new(font.size_px, font.size_px * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);

    // Hinting is off so outlines scale linearly with the font size.
    let attrs = Attrs::new()
        .family(to_cosmic_family(family))
        .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

    buffer.set_text(font_system, &text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);

    let mut advance: f32 = 0.0;
    for run in buffer.layout_runs() {
        advance = advance.max(run.line_w);

        for glyph in run.glyphs.iter() {
            let physical_glyph = glyph.physical((x, y), 1.0);

            // Floating-point position keeps sub-pixel precision.
            let glyph_x = x + glyph.x + glyph.font_size * glyph.x_offset;
            let glyph_y = y + glyph.y - glyph.font_size * glyph.y_offset;

            let Some(commands) =
                swash_cache.get_outline_commands(font_system, physical_glyph.cache_key)
            else {
                continue;
            };

            // Font outlines have Y pointing up, the canvas has Y pointing down.
            for cmd in commands {
                match cmd {
                    Command::MoveTo(p) => path_builder.move_to(glyph_x + p.x, glyph_y - p.y),
                    Command::LineTo(p) => path_builder.line_to(glyph_x + p.x, glyph_y - p.y),
                    Command::QuadTo(ctrl, end) => path_builder.quad_to(
                        glyph_x + ctrl.x,
                        glyph_y - ctrl.y,
                        glyph_x + end.x,
                        glyph_y - end.y,
                    ),
                    Command::CurveTo(c1, c2, end) => path_builder.cubic_to(
                        glyph_x + c1.x,
                        glyph_y - c1.y,
                        glyph_x + c2.x,
                        glyph_y - c2.y,
                        glyph_x + end.x,
                        glyph_y - end.y,
                    ),
                    Command::Close => path_builder.close(),
                }
            }
        }
    }

    Ok(advance)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// `text` with every line break replaced by a space.
fn single_line(text: &str) -> Cow<'_, str> {
    if text.contains(is_line_break) {
        Cow::Owned(text.replace(is_line_break, " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Measure the ink extents of `text` set in `font`.
///
/// Text without any outline (empty, whitespace only) measures as zero size
/// at the origin.
pub(crate) fn measure_text_extents(
    font_system: &mut FontSystem,
    swash_cache: &mut SwashCache,
    text: &str,
    font: &FontFace,
) -> CanvasResult<TextExtents> {
    let mut path_builder = tiny_skia::PathBuilder::new();
    let advance =
        append_text_outline(font_system, swash_cache, &mut path_builder, text, font, 0.0, 0.0)?;

    let extents = match path_builder.finish() {
        Some(path) => {
            let bounds = path.bounds();
            TextExtents {
                x_bearing: bounds.left(),
                y_bearing: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
                x_advance: advance,
                y_advance: 0.0,
            }
        }
        None => TextExtents {
            x_advance: advance,
            ..TextExtents::default()
        },
    };
    Ok(extents)
}
