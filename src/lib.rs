//! Sheet Music Recognizer WASM Module
//!
//! Recognizes elements of printed sheet music from an uploaded image:
//! locates staff lines by horizontal projection, assigns a pitch to
//! each externally detected note symbol, and formats the result as a
//! JSON document for the browser demo.

pub mod api;
pub mod detector;
pub mod error;
pub mod models;
pub mod processing;
pub mod renderers;

// Re-export commonly used types
pub use detector::{assign_pitches, Detection, NoteDetector};
pub use error::ScanError;
pub use models::{BoundingBox, DetectedNote, NoteClass, PitchLabel, StaffLineSet};
pub use processing::{find_staff_lines, map_pitch};
pub use renderers::format_detection_output;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Sheet Music Recognizer WASM module initialized");
}
