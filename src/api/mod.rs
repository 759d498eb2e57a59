//! Sheet Music Recognizer WASM API
//!
//! This module provides the JavaScript-facing API for the recognition
//! pipeline. It includes shared utilities for serialization, error
//! handling, and console logging, plus the endpoints the browser demo
//! calls: preprocessing, staff line detection, pitch assignment,
//! overlay geometry, and output formatting.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error conversion, and logging utilities
//! - `process`: the recognition endpoints

pub mod helpers;
pub mod process;

pub use process::{
    assign_pitches_js, detect_staff_lines, format_output, overlay_instructions,
    preprocess_image, process_score,
};
