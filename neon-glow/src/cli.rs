//! Command-line arguments.

use crate::color::parse_color;
use crate::error::NeonResult;
use crate::params::{
    check_blur_radius, FontSettings, Palette, RenderParams, DEFAULT_BACKGROUND,
    DEFAULT_BLUR_RADIUS, DEFAULT_FG1, DEFAULT_FG2, DEFAULT_FILL, DEFAULT_HEIGHT, DEFAULT_SHADOW,
    DEFAULT_WIDTH,
};
use clap::Parser;
use std::path::PathBuf;

/// neon-glow: Creates a neon glow effect image with the given text
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Text to render
    #[clap(short, long)]
    pub text: String,

    /// Image filename (png)
    #[clap(short, long)]
    pub filename: PathBuf,

    /// Image width in pixels
    #[clap(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[clap(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Image background color in hex (e.g. FF2200)
    #[clap(long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Text shadow color in hex (e.g. FF2200)
    #[clap(long, default_value = DEFAULT_SHADOW)]
    pub shadow: String,

    /// Text fill color in hex (e.g. FF2200)
    #[clap(long, default_value = DEFAULT_FILL)]
    pub fill: String,

    /// Text border color 1 in hex (e.g. FF2200)
    #[clap(long, default_value = DEFAULT_FG1)]
    pub fg1: String,

    /// Text border color 2 in hex (e.g. FF2200)
    #[clap(long, default_value = DEFAULT_FG2)]
    pub fg2: String,

    /// Font family to render with. Must be installed, or be a generic family
    /// (serif, sans-serif, cursive, fantasy, monospace). Defaults to Zapfino,
    /// falling back to cursive and then sans-serif
    #[clap(long)]
    pub font: Option<String>,

    /// Additional directory to load fonts from (repeatable)
    #[clap(long = "font-dir")]
    pub font_dirs: Vec<PathBuf>,

    /// Additional font file to load (repeatable)
    #[clap(long = "font-file")]
    pub font_files: Vec<PathBuf>,

    /// Gaussian blur radius of the glow, in pixels (0 disables the blur)
    #[clap(long, default_value_t = DEFAULT_BLUR_RADIUS)]
    pub blur_radius: f32,

    /// Write the blurred glow to the output file and reload it before drawing the text
    #[clap(long)]
    pub write_intermediate: bool,

    /// Log each rendering stage
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Validate colors and assemble the parameters of the run.
    pub fn into_params(self) -> NeonResult<RenderParams> {
        let palette = Palette {
            background: parse_color(&self.background)?,
            shadow: parse_color(&self.shadow)?,
            fill: parse_color(&self.fill)?,
            fg1: parse_color(&self.fg1)?,
            fg2: parse_color(&self.fg2)?,
        };

        let mut font = FontSettings {
            font_dirs: self.font_dirs,
            font_files: self.font_files,
            ..FontSettings::default()
        };
        if let Some(family) = self.font {
            font.families = vec![family];
        }

        Ok(RenderParams {
            text: self.text,
            output: self.filename,
            width: self.width,
            height: self.height,
            palette,
            font,
            blur_radius: check_blur_radius(self.blur_radius)?,
            write_intermediate: self.write_intermediate,
        })
    }
}
