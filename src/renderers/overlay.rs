//! Overlay drawing instructions for the result display
//!
//! The browser draws detection boxes over the uploaded image. This
//! module stays pure: it maps detections to rectangles with a per-class
//! color and label, and the host does the actual drawing.

use serde::{Deserialize, Serialize};

use crate::models::DetectedNote;

/// RGB color, 0-255 per channel
pub type Color = [u8; 3];

const CLASS_COLORS: [Color; 4] = [
    [0, 200, 0],   // notehead
    [0, 120, 255], // half-note
    [255, 160, 0], // whole-note
    [200, 0, 200], // rest
];

const FALLBACK_COLOR: Color = [128, 128, 128];

/// One rectangle for the host to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: Color,
    /// Caption such as "G4 (0.92)", or just the confidence when pitch
    /// is undetermined
    pub label: String,
}

/// Color for a detector class id
pub fn class_color(class: u32) -> Color {
    CLASS_COLORS
        .get(class as usize)
        .copied()
        .unwrap_or(FALLBACK_COLOR)
}

/// Drawing instructions for a batch of recognized notes
pub fn overlay_rects(notes: &[DetectedNote]) -> Vec<OverlayRect> {
    notes
        .iter()
        .map(|n| {
            let label = match n.pitch {
                Some(p) => format!("{} ({:.2})", p, n.confidence),
                None => format!("({:.2})", n.confidence),
            };
            OverlayRect {
                x: n.bbox.x1,
                y: n.bbox.y1,
                width: n.bbox.width(),
                height: n.bbox.height(),
                color: class_color(n.class.0),
                label,
            }
        })
        .collect()
}
