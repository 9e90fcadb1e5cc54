//! Offscreen rendering: compositing the editing surface and exporting it.

pub mod compose;
pub mod export;
