//! Clipboard image reading.
//!
//! Self-contained module for pulling a pasted image off the OS clipboard
//! via `arboard` (NSPasteboard on macOS, X11/Wayland on Linux). No coupling
//! to UI or application state.
//!
//! Pasted images skip the type and size checks applied to dropped files:
//! the clipboard hands over ready-to-use RGBA data, and whatever it holds
//! becomes the selected image.

use image::RgbaImage;

use crate::error::PasteError;
use crate::state::data::{ImageMime, SelectedImage};

/// Filename attached to pasted images, which arrive without one.
const PASTED_NAME: &str = "pasted-image.png";

/// Try to read an image from the system clipboard.
pub fn read_clipboard_image() -> Result<SelectedImage, PasteError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| PasteError::Unavailable(e.to_string()))?;

    let data = clipboard.get_image().map_err(|_| PasteError::NoImage)?;

    from_raw_parts(data.width, data.height, data.bytes.into_owned())
}

/// Build a [`SelectedImage`] from raw RGBA clipboard data.
pub(crate) fn from_raw_parts(
    width: usize,
    height: usize,
    bytes: Vec<u8>,
) -> Result<SelectedImage, PasteError> {
    let size_bytes = bytes.len() as u64;
    let pixels = RgbaImage::from_raw(width as u32, height as u32, bytes)
        .ok_or(PasteError::Malformed)?;

    Ok(SelectedImage {
        name: PASTED_NAME.to_string(),
        mime: ImageMime::Png,
        size_bytes,
        pixels,
    })
}
