//! Render text with a neon glow effect into a PNG image.
//!
//! The glow is built in two drawing passes over one canvas: a glow base
//! (background plus a thick shadow outline) that is Gaussian-blurred, then
//! the crisp text with two colored rings and a solid fill on top.

pub mod cli;
pub mod color;
pub mod error;
pub mod layout;
pub mod params;
pub mod render;

pub use color::{parse_color, Rgb};
pub use error::{NeonError, NeonResult};
pub use layout::{fit_text, FitConfig, TextLayout};
pub use params::{FontSettings, Palette, RenderParams};
pub use render::{render, render_to_file, BlurredBase, GlowBase, NeonImage};
