//! PNG export of the composited surface.
//!
//! Encoding runs on a blocking thread, the save dialog is async, and the UI
//! stays interactive throughout. There is no timeout and no cancellation
//! once the write begins; a cancelled dialog resolves to `Ok(None)`.

use std::io::Cursor;
use std::path::PathBuf;

use image::{ImageFormat, RgbaImage};

use crate::error::ExportError;

/// Default filename offered by the save dialog.
pub const EXPORT_FILENAME: &str = "edited-image.png";

/// Encode the surface and let the user save it.
///
/// Returns the written path, or `None` if the user dismissed the dialog.
pub async fn save_composite(surface: RgbaImage) -> Result<Option<PathBuf>, ExportError> {
    let png = tokio::task::spawn_blocking(move || encode_png(&surface))
        .await
        .map_err(|e| ExportError::Encode(e.to_string()))??;

    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Save Edited Image")
        .set_file_name(EXPORT_FILENAME)
        .add_filter("PNG Image", &["png"]);
    if let Some(dir) = dirs::picture_dir().or_else(dirs::download_dir) {
        dialog = dialog.set_directory(&dir);
    }

    let Some(handle) = dialog.save_file().await else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    tokio::fs::write(&path, png)
        .await
        .map_err(|e| ExportError::Write(e.to_string()))?;

    Ok(Some(path))
}

/// PNG-encode the surface into memory.
pub(crate) fn encode_png(surface: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    surface
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(buf)
}
