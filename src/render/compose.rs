//! Compositing of the editing surface.
//!
//! The preview widget and the exported PNG both come from [`compose`], so
//! what the user sees and what lands on disk are the same pixels. Two
//! stacked layers on a fixed-size surface: a gradient backdrop scaled about
//! the surface center, and the image fit into a centered box and scaled
//! about its own center. Both layers are clipped to the surface.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::state::gradient::GradientPreset;

/// Surface width in pixels.
pub const SURFACE_WIDTH: u32 = 500;
/// Surface height in pixels.
pub const SURFACE_HEIGHT: u32 = 350;
/// The image may occupy at most this fraction of each surface dimension
/// before its own scale factor applies.
pub const IMAGE_FIT: f32 = 0.8;

/// Render the full composite at the given layer scales.
pub fn compose(
    image: &RgbaImage,
    gradient: &GradientPreset,
    image_scale: f32,
    background_scale: f32,
) -> RgbaImage {
    let mut surface = RgbaImage::from_pixel(SURFACE_WIDTH, SURFACE_HEIGHT, Rgba([0, 0, 0, 0]));
    fill_background(&mut surface, gradient, background_scale);
    overlay_image(&mut surface, image, image_scale);
    surface
}

/// Fill the backdrop: the gradient covers a rect of the surface size scaled
/// about the center. Below a scale of 1.0 the margins stay transparent.
fn fill_background(surface: &mut RgbaImage, gradient: &GradientPreset, scale: f32) {
    let (w, h) = (SURFACE_WIDTH as f32, SURFACE_HEIGHT as f32);
    let (bw, bh) = (w * scale, h * scale);
    let (ox, oy) = ((w - bw) * 0.5, (h - bh) * 0.5);

    for (x, y, pixel) in surface.enumerate_pixels_mut() {
        // Sample at the pixel center, in backdrop-rect coordinates.
        let fx = x as f32 + 0.5 - ox;
        let fy = y as f32 + 0.5 - oy;
        if fx < 0.0 || fy < 0.0 || fx >= bw || fy >= bh {
            continue;
        }
        let t = gradient.axis_t(fx, fy, bw, bh);
        *pixel = Rgba(gradient.sample(t));
    }
}

/// Place the image: fit into the 80% box preserving aspect ratio (small
/// images are scaled up to fill it), apply the user scale, center, and
/// alpha-composite. `overlay` clips anything past the surface edges.
fn overlay_image(surface: &mut RgbaImage, image: &RgbaImage, scale: f32) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }

    let max_w = SURFACE_WIDTH as f32 * IMAGE_FIT;
    let max_h = SURFACE_HEIGHT as f32 * IMAGE_FIT;
    let fit = (max_w / image.width() as f32).min(max_h / image.height() as f32);

    let target_w = (image.width() as f32 * fit * scale).round().max(1.0) as u32;
    let target_h = (image.height() as f32 * fit * scale).round().max(1.0) as u32;
    let resized = imageops::resize(image, target_w, target_h, FilterType::Lanczos3);

    let x = (SURFACE_WIDTH as i64 - target_w as i64) / 2;
    let y = (SURFACE_HEIGHT as i64 - target_h as i64) / 2;
    imageops::overlay(surface, &resized, x, y);
}
