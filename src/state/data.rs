//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the acquisition layer and the UI layer.

use image::RgbaImage;

/// MIME type of an accepted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
        }
    }
}

/// The single image currently being edited.
///
/// Decoded pixels are kept alongside the metadata so both screens can render
/// without touching the filesystem again. At most one of these exists at a
/// time, owned by the top-level application state.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    /// Filename only (e.g., "screenshot.png")
    pub name: String,
    /// Sniffed MIME type
    pub mime: ImageMime,
    /// Size of the source in bytes
    pub size_bytes: u64,
    /// Decoded RGBA pixel data
    pub pixels: RgbaImage,
}

impl SelectedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn mime_strings() {
        assert_eq!(ImageMime::Jpeg.as_str(), "image/jpeg");
        assert_eq!(ImageMime::Png.as_str(), "image/png");
    }

    #[test]
    fn dimensions_come_from_pixels() {
        let image = SelectedImage {
            name: "test.png".to_string(),
            mime: ImageMime::Png,
            size_bytes: 64,
            pixels: RgbaImage::from_pixel(4, 2, Rgba([1, 2, 3, 255])),
        };
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 2);
    }
}
