//! Pixel data, filter, and PNG input/output operations for CanvasContext.

use super::CanvasContext;
use crate::error::CanvasResult;
use crate::font_config::ResolvedFontConfig;
use std::path::Path;

impl CanvasContext {
    /// Load a PNG file into a new canvas of the image's size.
    pub fn from_png_file(path: impl AsRef<Path>, fonts: &ResolvedFontConfig) -> CanvasResult<Self> {
        let path = path.as_ref();
        log::debug!(target: "canvas", "load {}", path.display());
        let rgba = image::open(path)?.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut ctx = Self::with_resolved(width, height, fonts)?;
        ctx.put_image_data(rgba.as_raw(), width, height, 0, 0);
        Ok(ctx)
    }

    // --- Filters ---

    /// Blur the surface with an isotropic Gaussian of standard deviation `sigma` pixels.
    ///
    /// Works on pixels only; the current path is untouched.
    pub fn gaussian_blur(&mut self, sigma: f32) {
        log::debug!(target: "canvas", "gaussianBlur {}", sigma);
        crate::filter::gaussian_blur(&mut self.pixmap, sigma);
    }

    // --- Image data ---

    /// Get straight-alpha RGBA data for a region of the canvas.
    ///
    /// Pixels outside the canvas read as transparent black.
    pub fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0u8; (width * height * 4) as usize];

        for dy in 0..height {
            for dx in 0..width {
                let src_x = x + dx as i32;
                let src_y = y + dy as i32;

                if src_x < 0 || src_x >= self.width as i32 || src_y < 0 || src_y >= self.height as i32
                {
                    continue;
                }

                let dst_idx = ((dy * width + dx) * 4) as usize;
                let src_idx = ((src_y as u32 * self.width + src_x as u32) * 4) as usize;
                let pixel = &self.pixmap.data()[src_idx..src_idx + 4];

                // Convert from premultiplied alpha to straight alpha
                let a = pixel[3];
                match a {
                    0 => {}
                    255 => data[dst_idx..dst_idx + 4].copy_from_slice(pixel),
                    _ => {
                        let alpha_f = a as f32 / 255.0;
                        data[dst_idx] = (pixel[0] as f32 / alpha_f).round().min(255.0) as u8;
                        data[dst_idx + 1] = (pixel[1] as f32 / alpha_f).round().min(255.0) as u8;
                        data[dst_idx + 2] = (pixel[2] as f32 / alpha_f).round().min(255.0) as u8;
                        data[dst_idx + 3] = a;
                    }
                }
            }
        }

        data
    }

    /// Write straight-alpha RGBA data to the canvas with its top-left corner at (dx, dy).
    ///
    /// Pixels are replaced, not composited. Pixels falling outside the canvas
    /// are ignored.
    pub fn put_image_data(&mut self, data: &[u8], width: u32, height: u32, dx: i32, dy: i32) {
        let canvas_width = self.width as i32;
        let canvas_height = self.height as i32;
        let pixmap_data = self.pixmap.data_mut();

        for sy in 0..height as i32 {
            let dst_row = dy + sy;
            if dst_row < 0 || dst_row >= canvas_height {
                continue;
            }

            for sx in 0..width as i32 {
                let dst_col = dx + sx;
                if dst_col < 0 || dst_col >= canvas_width {
                    continue;
                }

                let src_idx = ((sy as u32 * width + sx as u32) * 4) as usize;
                let dst_idx = ((dst_row * canvas_width + dst_col) * 4) as usize;
                let Some(src) = data.get(src_idx..src_idx + 4) else {
                    return;
                };
                let (r, g, b, a) = (src[0], src[1], src[2], src[3]);

                // Convert to premultiplied alpha using integer math
                let (pr, pg, pb) = match a {
                    255 => (r, g, b),
                    0 => (0, 0, 0),
                    _ => {
                        let a16 = a as u16;
                        (
                            ((r as u16 * a16 + 127) / 255) as u8,
                            ((g as u16 * a16 + 127) / 255) as u8,
                            ((b as u16 * a16 + 127) / 255) as u8,
                        )
                    }
                };

                pixmap_data[dst_idx..dst_idx + 4].copy_from_slice(&[pr, pg, pb, a]);
            }
        }
    }

    // --- PNG output ---

    /// Encode the canvas as an 8-bit RGBA PNG.
    ///
    /// `ppi` sets the pixel density metadata and defaults to 72.
    pub fn to_png(&self, ppi: Option<f32>) -> CanvasResult<Vec<u8>> {
        let ppi = ppi.unwrap_or(72.0);

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Pixels per meter
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;
            let data = self.get_image_data(0, 0, self.width, self.height);
            writer.write_image_data(&data)?;
        }
        Ok(buf)
    }

    /// Encode the canvas as PNG and write it to `path`, replacing any existing file.
    pub fn write_png(&self, path: impl AsRef<Path>) -> CanvasResult<()> {
        let path = path.as_ref();
        log::debug!(target: "canvas", "write {}", path.display());
        let png_data = self.to_png(None)?;
        std::fs::write(path, png_data)?;
        Ok(())
    }
}
