//! Renderers module for the sheet music recognizer
//!
//! This module contains output formatting: the JSON detection document
//! consumed by downstream tools, and overlay drawing instructions for
//! the browser's result display.

pub mod json;
pub mod overlay;

// Re-export commonly used types
pub use json::{format_detection_output, DetectionDocument};
pub use overlay::{overlay_rects, OverlayRect};
