//! Pixel filters applied to a canvas surface.

use image::{ImageBuffer, Rgba};
use tiny_skia::Pixmap;

/// Blur the pixmap in place with an isotropic Gaussian of standard deviation `sigma`.
///
/// The blur runs on premultiplied pixels, so color never bleeds out of
/// transparent regions. Non-finite or non-positive sigmas leave the pixmap
/// untouched.
pub(crate) fn gaussian_blur(pixmap: &mut Pixmap, sigma: f32) {
    if !sigma.is_finite() || sigma <= 0.0 {
        return;
    }

    let (width, height) = (pixmap.width(), pixmap.height());
    let Some(buffer) =
        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(width, height, pixmap.data().to_vec())
    else {
        return;
    };

    // Three-pass box approximation of the Gaussian, linear in the radius.
    let blurred = image::imageops::fast_blur(&buffer, sigma);
    let data = pixmap.data_mut();
    data.copy_from_slice(blurred.as_raw());

    // Rounding in the box passes can leave a color channel above its alpha.
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        px[0] = px[0].min(a);
        px[1] = px[1].min(a);
        px[2] = px[2].min(a);
    }
}
