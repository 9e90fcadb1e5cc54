//! Application error types.

use thiserror::Error;

/// Failures while exporting the composite to a PNG file.
///
/// Export errors are surfaced in the status line; a cancelled save dialog is
/// not an error and is reported separately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("could not encode PNG: {0}")]
    Encode(String),
    #[error("could not write file: {0}")]
    Write(String),
}

/// Failures while reading a pasted image from the OS clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasteError {
    /// The clipboard could not be opened at all.
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),
    /// The clipboard holds no image. Ignored silently by the caller.
    #[error("no image on the clipboard")]
    NoImage,
    /// The clipboard reported dimensions that do not match its data.
    #[error("clipboard image data is malformed")]
    Malformed,
}
