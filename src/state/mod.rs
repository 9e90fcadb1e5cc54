//! State management module
//!
//! This module handles all application state, including:
//! - The selected image and its metadata (data.rs)
//! - Acquisition progress and rejection records (upload.rs)
//! - Edit parameters for the composition screen (edit.rs)
//! - The gradient backdrop catalog (gradient.rs)

pub mod data;
pub mod edit;
pub mod gradient;
pub mod upload;
