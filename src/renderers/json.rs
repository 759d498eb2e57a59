//! The JSON detection document
//!
//! Field order and nesting are an external contract: downstream
//! consumers parse exactly
//! `{"staff_lines":[{"y_position":N},...],"notes":[{"pitch":S,"duration":S,"position":{"x":N,"y":N}},...]}`.
//! Struct declaration order pins the field order under `serde_json`.

use serde::{Deserialize, Serialize};

use crate::models::{DetectedNote, StaffLineSet};

/// Label emitted when pitch mapping could not run for an image
pub const UNDETERMINED_PITCH: &str = "undetermined";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionDocument {
    pub staff_lines: Vec<StaffLineEntry>,
    pub notes: Vec<NoteEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffLineEntry {
    pub y_position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub pitch: String,
    pub duration: String,
    pub position: NotePosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePosition {
    pub x: u32,
    pub y: u32,
}

/// Build the output document from located lines and pitched notes
pub fn build_document(staff_lines: &StaffLineSet, notes: &[DetectedNote]) -> DetectionDocument {
    DetectionDocument {
        staff_lines: staff_lines
            .ys()
            .iter()
            .map(|&y| StaffLineEntry { y_position: y })
            .collect(),
        notes: notes
            .iter()
            .map(|n| {
                let (x, y) = n.bbox.top_left();
                NoteEntry {
                    pitch: n
                        .pitch
                        .map(|p| p.as_str().to_string())
                        .unwrap_or_else(|| UNDETERMINED_PITCH.to_string()),
                    duration: n.duration.clone(),
                    position: NotePosition { x, y },
                }
            })
            .collect(),
    }
}

/// Serialize the detection results to the contract JSON string
pub fn format_detection_output(staff_lines: &StaffLineSet, notes: &[DetectedNote]) -> String {
    // Serialization of these plain structs cannot fail
    serde_json::to_string(&build_document(staff_lines, notes)).unwrap_or_default()
}
