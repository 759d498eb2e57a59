//! Models module for the sheet music recognizer
//!
//! This module contains the data structures flowing through the
//! recognition pipeline: staff geometry, detected note symbols, and
//! the pitch vocabulary.

pub mod note;
pub mod pitch;
pub mod staff;

// Re-export commonly used types
pub use note::{BoundingBox, DetectedNote, NoteClass, DEFAULT_DURATION};
pub use pitch::PitchLabel;
pub use staff::{StaffLineSet, REFERENCE_LINE_INDEX, STANDARD_STAFF_LINES};
