//! Candidate file ingestion
//!
//! Reads a dropped or picked file, sniffs its format from the content (never
//! the extension), applies the acquisition constraints, and decodes accepted
//! candidates off the UI thread. Rejected candidates come back as rejection
//! records, not errors; the user retries by simply offering another file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageFormat;

use crate::state::data::{ImageMime, SelectedImage};
use crate::state::upload::{RejectReason, Rejection, MAX_FILE_BYTES};

/// Filename to show the user for a candidate path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load and validate one candidate file.
///
/// Validation reasons accumulate in order: type first, then size. Any reason
/// rejects the candidate without decoding it.
pub async fn load_candidate(path: PathBuf) -> Result<Arc<SelectedImage>, Rejection> {
    let filename = display_name(&path);

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return Err(Rejection::single(
                filename,
                RejectReason::Unreadable(e.to_string()),
            ))
        }
    };

    let mime = match image::guess_format(&bytes) {
        Ok(ImageFormat::Jpeg) => Some(ImageMime::Jpeg),
        Ok(ImageFormat::Png) => Some(ImageMime::Png),
        _ => None,
    };

    let mut reasons = Vec::new();
    if mime.is_none() {
        reasons.push(RejectReason::InvalidType);
    }
    if bytes.len() as u64 > MAX_FILE_BYTES {
        reasons.push(RejectReason::TooLarge);
    }

    match (mime, reasons.is_empty()) {
        (Some(mime), true) => decode_accepted(filename, mime, bytes).await,
        _ => Err(Rejection::new(filename, reasons)),
    }
}

/// Decode an accepted candidate on a blocking thread; decoding is
/// CPU-intensive and must not stall the event loop.
async fn decode_accepted(
    filename: String,
    mime: ImageMime,
    bytes: Vec<u8>,
) -> Result<Arc<SelectedImage>, Rejection> {
    let size_bytes = bytes.len() as u64;

    let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await;

    match decoded {
        Ok(Ok(decoded)) => {
            let image = SelectedImage {
                name: filename,
                mime,
                size_bytes,
                pixels: decoded.to_rgba8(),
            };
            println!(
                "📷 Loaded {} ({}, {}x{}, {} bytes)",
                image.name,
                image.mime.as_str(),
                image.width(),
                image.height(),
                image.size_bytes
            );
            Ok(Arc::new(image))
        }
        Ok(Err(e)) => Err(Rejection::single(
            filename,
            RejectReason::Unreadable(e.to_string()),
        )),
        Err(e) => Err(Rejection::single(
            filename,
            RejectReason::Unreadable(e.to_string()),
        )),
    }
}
