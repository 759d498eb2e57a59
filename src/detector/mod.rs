//! The note detector seam
//!
//! Object detection is an external capability: a pretrained model run by
//! the host (in the browser demo, a JS inference runtime). This module
//! fixes the contract — bounding boxes, confidences, class ids — and
//! turns raw detections into [`DetectedNote`]s with pitches assigned.
//!
//! A detector handle is constructed once at startup and passed by
//! reference into each request; no global model cache exists here.

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::models::{BoundingBox, DetectedNote, NoteClass, StaffLineSet};
use crate::processing::map_pitch_on_staff;

/// One raw detection as the external model reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// `[x1, y1, x2, y2]` in pixel space
    pub bbox: [u32; 4],

    /// Model confidence in [0, 1]
    pub confidence: f32,

    /// Model class id
    pub class: u32,
}

/// An external object-detection capability
///
/// Implementations wrap whatever inference runtime the host provides.
/// The crate ships no model of its own; fabricating detections instead
/// of running a real model is a test-only affair (see `FixedDetector`
/// in the test suite).
pub trait NoteDetector {
    fn detect(&self, image: &RgbImage) -> Result<Vec<Detection>, ScanError>;
}

/// Convert raw detections into notes, assigning a pitch to each
///
/// With fewer than 3 staff lines no pitch can be determined; every note
/// is then returned with `pitch: None` rather than failing the batch.
/// The degenerate-spacing error cannot occur for a locator-produced
/// staff set, but is still surfaced if it does.
pub fn assign_pitches(
    detections: &[Detection],
    staff_lines: &StaffLineSet,
) -> Result<Vec<DetectedNote>, ScanError> {
    let mappable = staff_lines.len() >= 3;
    if !mappable {
        log::warn!(
            "only {} staff lines detected; reporting undetermined pitch for {} notes",
            staff_lines.len(),
            detections.len()
        );
    }

    let mut notes = Vec::with_capacity(detections.len());
    for d in detections {
        let [x1, y1, x2, y2] = d.bbox;
        let mut note = DetectedNote::new(
            BoundingBox::new(x1, y1, x2, y2),
            d.confidence.clamp(0.0, 1.0),
            NoteClass(d.class),
        );
        if mappable {
            note.pitch = Some(map_pitch_on_staff(note.pitch_y() as f64, staff_lines)?);
        }
        notes.push(note);
    }
    Ok(notes)
}
