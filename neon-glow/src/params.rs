//! Render parameters, fixed for the duration of a run.

use crate::color::Rgb;
use crate::error::{NeonError, NeonResult};
use neon_canvas::FontConfig;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
pub const DEFAULT_BACKGROUND: &str = "000000";
pub const DEFAULT_SHADOW: &str = "ec0e77";
pub const DEFAULT_FILL: &str = "FFFFFF";
pub const DEFAULT_FG1: &str = "ff31f4";
pub const DEFAULT_FG2: &str = "ffd796";
/// Gaussian blur radius of the glow base, in pixels.
pub const DEFAULT_BLUR_RADIUS: f32 = 35.0;
/// Families tried when no font is requested explicitly.
pub const DEFAULT_FONT_FAMILIES: [&str; 3] = ["Zapfino", "cursive", "sans-serif"];

/// The five colors of a neon image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Solid color painted behind the glow.
    pub background: Rgb,
    /// Wide outline that becomes the blurred halo.
    pub shadow: Rgb,
    /// Glyph interior, in both the glow base and the final text.
    pub fill: Rgb,
    /// Outer glow ring.
    pub fg1: Rgb,
    /// Inner glow ring.
    pub fg2: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::from_bytes(0x00, 0x00, 0x00),
            shadow: Rgb::from_bytes(0xec, 0x0e, 0x77),
            fill: Rgb::from_bytes(0xff, 0xff, 0xff),
            fg1: Rgb::from_bytes(0xff, 0x31, 0xf4),
            fg2: Rgb::from_bytes(0xff, 0xd7, 0x96),
        }
    }
}

/// Where fonts come from and which family to set the text in.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSettings {
    /// Families in order of preference.
    pub families: Vec<String>,
    pub font_dirs: Vec<PathBuf>,
    pub font_files: Vec<PathBuf>,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            families: DEFAULT_FONT_FAMILIES.iter().map(|f| f.to_string()).collect(),
            font_dirs: Vec::new(),
            font_files: Vec::new(),
        }
    }
}

impl FontSettings {
    pub fn to_font_config(&self) -> FontConfig {
        FontConfig {
            font_dirs: self.font_dirs.clone(),
            font_files: self.font_files.clone(),
            ..FontConfig::default()
        }
    }
}

/// Everything a run needs, built once from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub text: String,
    /// Output PNG path.
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
    pub font: FontSettings,
    pub blur_radius: f32,
    /// Write the blurred glow base to `output` and reload it before drawing
    /// the text, instead of handing it over in memory.
    pub write_intermediate: bool,
}

impl RenderParams {
    /// Parameters with every optional setting at its default.
    pub fn new(text: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            output: output.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette: Palette::default(),
            font: FontSettings::default(),
            blur_radius: DEFAULT_BLUR_RADIUS,
            write_intermediate: false,
        }
    }
}

/// Accept a blur radius of zero (no blur) or more.
pub fn check_blur_radius(radius: f32) -> NeonResult<f32> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(NeonError::InvalidBlurRadius(radius))
    }
}
