//! Integration tests for neon-canvas.

use neon_canvas::{CanvasColor, CanvasContext, FontConfig, RectParams, ResolvedFontConfig};
use std::sync::OnceLock;

/// System fonts, scanned once for the whole test binary.
fn system_fonts() -> &'static ResolvedFontConfig {
    static FONTS: OnceLock<ResolvedFontConfig> = OnceLock::new();
    FONTS.get_or_init(|| FontConfig::default().resolve().unwrap())
}

/// Skip test if the machine has no fonts to outline text with.
macro_rules! skip_if_no_fonts {
    () => {
        if system_fonts().face_count() == 0 {
            eprintln!("Skipping test: no system fonts installed");
            return;
        }
    };
}

/// Test painting a background and filling a shape on top.
#[test]
fn test_paint_then_fill_rectangle() {
    let mut ctx = CanvasContext::with_resolved(200, 100, system_fonts()).unwrap();

    ctx.set_fill_color(CanvasColor::rgb(1.0, 0.0, 0.0));
    ctx.paint();

    ctx.begin_path();
    ctx.rect(&RectParams {
        x: 50.0,
        y: 25.0,
        width: 100.0,
        height: 50.0,
    });
    ctx.set_fill_color(CanvasColor::rgb(1.0, 1.0, 1.0));
    ctx.fill();

    let data = ctx.get_image_data(0, 0, 200, 100);
    let idx = |x: usize, y: usize| (y * 200 + x) * 4;
    assert_eq!(&data[idx(0, 0)..idx(0, 0) + 4], &[255, 0, 0, 255]);
    assert_eq!(&data[idx(100, 50)..idx(100, 50) + 4], &[255, 255, 255, 255]);
}

/// Test that blurring softens a hard edge without touching the path.
#[test]
fn test_blur_after_drawing() {
    let mut ctx = CanvasContext::with_resolved(100, 100, system_fonts()).unwrap();
    ctx.paint();
    ctx.begin_path();
    ctx.rect(&RectParams {
        x: 0.0,
        y: 0.0,
        width: 50.0,
        height: 100.0,
    });
    ctx.set_fill_color(CanvasColor::rgb(1.0, 1.0, 1.0));
    ctx.fill();

    ctx.gaussian_blur(5.0);
    assert!(ctx.has_path());

    let left = ctx.get_image_data(48, 50, 1, 1)[0];
    let right = ctx.get_image_data(52, 50, 1, 1)[0];
    assert!(left < 255);
    assert!(right > 0);
    assert!(left > right);
}

/// Test that text measurement is repeatable and scales with the font size.
#[test]
fn test_text_extents_deterministic() {
    skip_if_no_fonts!();
    let mut ctx = CanvasContext::with_resolved(400, 200, system_fonts()).unwrap();
    ctx.select_font_face(&["sans-serif"]);

    ctx.set_font_size(40.0);
    let first = ctx.text_extents("HELLO").unwrap();
    let second = ctx.text_extents("HELLO").unwrap();
    assert_eq!(first, second);
    assert!(first.width > 0.0);
    assert!(first.height > 0.0);
    // Capitals sit above the baseline
    assert!(first.y_bearing < 0.0);

    ctx.set_font_size(80.0);
    let bigger = ctx.text_extents("HELLO").unwrap();
    assert!(bigger.width > first.width * 1.8);
    assert!(bigger.height > first.height * 1.8);
}

/// Test that a text path lands where its extents say it does.
#[test]
fn test_text_path_matches_extents() {
    skip_if_no_fonts!();
    let mut ctx = CanvasContext::with_resolved(400, 200, system_fonts()).unwrap();
    ctx.set_fill_color(CanvasColor::rgb(0.0, 0.0, 0.0));
    ctx.paint();

    ctx.select_font_face(&["sans-serif"]);
    ctx.set_font_size(100.0);
    let extents = ctx.text_extents("I").unwrap();

    let (x, y) = (100.0, 150.0);
    ctx.begin_path();
    ctx.text_path("I", x, y).unwrap();
    ctx.set_fill_color(CanvasColor::rgb(1.0, 1.0, 1.0));
    ctx.fill();

    let cx = (x + extents.x_bearing + extents.width / 2.0) as i32;
    let cy = (y + extents.y_bearing + extents.height / 2.0) as i32;
    assert_eq!(ctx.get_image_data(cx, cy, 1, 1), vec![255, 255, 255, 255]);
    // Far corner stays untouched
    assert_eq!(ctx.get_image_data(399, 0, 1, 1), vec![0, 0, 0, 255]);
}

/// Test that line breaks do not start a new line.
#[test]
fn test_line_breaks_stay_on_one_line() {
    skip_if_no_fonts!();
    let mut ctx = CanvasContext::with_resolved(400, 200, system_fonts()).unwrap();
    ctx.select_font_face(&["sans-serif"]);
    ctx.set_font_size(40.0);

    let spaced = ctx.text_extents("NEON SIGN").unwrap();
    let broken = ctx.text_extents("NEON\nSIGN").unwrap();
    assert_eq!(broken, spaced);
}
