use neon_canvas::{CanvasContext, FontConfig, ResolvedFontConfig};
use neon_glow::layout::{fit_text, prepare_text_path, FitConfig, MAX_FONT_SIZE, MIN_FONT_SIZE};
use rstest::rstest;
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

fn sans_canvas(width: u32, height: u32) -> CanvasContext {
    let mut ctx = CanvasContext::with_resolved(width, height, system_fonts()).unwrap();
    ctx.select_font_face(&["sans-serif"]);
    ctx
}

#[rstest]
#[case("HELLO", 1920, 1080)]
#[case("A much longer neon sign text", 800, 300)]
#[case("Open 24 hours", 640, 480)]
#[case("Glow", 300, 300)]
fn test_fit_picks_largest_size_that_fits(
    #[case] text: &str,
    #[case] width: u32,
    #[case] height: u32,
) {
    skip_if_no_fonts!();
    let config = FitConfig::default();
    let mut ctx = sans_canvas(width, height);
    let layout = fit_text(&mut ctx, text, &config).unwrap();
    let (w, h) = (width as f32, height as f32);

    assert!((MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&layout.font_size));
    assert_eq!(ctx.font().size_px, layout.font_size as f32);

    let fits = |size: u32, ext: &neon_canvas::TextExtents| {
        let padding = config.padding(size) as f32;
        ext.width <= w - padding && ext.height <= h - padding
    };

    if layout.font_size > MIN_FONT_SIZE {
        assert!(fits(layout.font_size, &layout.extents));
    }

    // The next size up overflows
    if layout.font_size < MAX_FONT_SIZE {
        let larger = layout.font_size + config.step;
        ctx.set_font_size(larger as f32);
        let extents = ctx.text_extents(text).unwrap();
        assert!(!fits(larger, &extents), "{} px would fit too", larger);
    }

    // Ink box is centered on the canvas
    let center_x = layout.x + layout.extents.x_bearing + layout.extents.width / 2.0;
    let center_y = layout.y + layout.extents.y_bearing + layout.extents.height / 2.0;
    assert!((center_x - w / 2.0).abs() < 1e-2, "center x {}", center_x);
    assert!((center_y - h / 2.0).abs() < 1e-2, "center y {}", center_y);
}

#[test]
fn test_fit_is_deterministic() {
    skip_if_no_fonts!();
    let first = fit_text(&mut sans_canvas(1920, 1080), "HELLO", &FitConfig::default()).unwrap();
    let second = fit_text(&mut sans_canvas(1920, 1080), "HELLO", &FitConfig::default()).unwrap();
    assert_eq!(first, second);
    assert!(first.extents.width > 0.0);
}

#[test]
fn test_text_that_never_fits_uses_minimum_size() {
    skip_if_no_fonts!();
    let text = "This sign has far too many words to ever fit on a tiny canvas";
    let mut ctx = sans_canvas(200, 100);
    let layout = fit_text(&mut ctx, text, &FitConfig::default()).unwrap();
    assert_eq!(layout.font_size, MIN_FONT_SIZE);
}

#[test]
fn test_prepared_path_is_repeatable() {
    skip_if_no_fonts!();
    let mut ctx = CanvasContext::with_resolved(800, 400, system_fonts()).unwrap();
    let families = vec!["sans-serif".to_string()];
    let layout = prepare_text_path(&mut ctx, "HELLO", &families, &FitConfig::default()).unwrap();
    assert!(ctx.has_path());

    let again = prepare_text_path(&mut ctx, "HELLO", &families, &FitConfig::default()).unwrap();
    assert_eq!(layout, again);
}
