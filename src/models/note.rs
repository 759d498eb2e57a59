//! Detected note symbols
//!
//! These types carry what the external object detector reports, plus the
//! pitch the mapper assigns afterward. The recognition core only ever
//! reads a note's bounding-box top edge and writes its pitch field.

use serde::{Deserialize, Serialize};

use super::pitch::PitchLabel;

/// Axis-aligned bounding box in pixel space, `x1 <= x2`, `y1 <= y2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl BoundingBox {
    /// Build from `[x1, y1, x2, y2]`, normalizing a swapped corner pair
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    /// Top-left corner, the position reported in the output document
    pub fn top_left(&self) -> (u32, u32) {
        (self.x1, self.y1)
    }
}

/// Detector class id with the class-name table the detection model uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteClass(pub u32);

impl NoteClass {
    /// Human-readable class name; unknown ids fall back to "symbol"
    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "notehead",
            1 => "half-note",
            2 => "whole-note",
            3 => "rest",
            _ => "symbol",
        }
    }
}

/// Default duration label the detector assigns before rhythm analysis
pub const DEFAULT_DURATION: &str = "quarter";

/// One note symbol reported by the detector, with its assigned pitch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedNote {
    pub bbox: BoundingBox,

    /// Detector confidence in [0, 1]
    pub confidence: f32,

    pub class: NoteClass,

    /// Duration label ("quarter" until rhythm analysis refines it)
    pub duration: String,

    /// Pitch from position mapping; `None` when the staff geometry could
    /// not support mapping (fewer than 3 detected lines)
    pub pitch: Option<PitchLabel>,
}

impl DetectedNote {
    /// Wrap a raw detection with the default duration and no pitch yet
    pub fn new(bbox: BoundingBox, confidence: f32, class: NoteClass) -> Self {
        Self {
            bbox,
            confidence,
            class,
            duration: DEFAULT_DURATION.to_string(),
            pitch: None,
        }
    }

    /// The vertical coordinate pitch mapping uses (bounding-box top edge)
    pub fn pitch_y(&self) -> u32 {
        self.bbox.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_normalizes_corners() {
        let b = BoundingBox::new(7, 8, 5, 6);
        assert_eq!(b, BoundingBox { x1: 5, y1: 6, x2: 7, y2: 8 });
        assert_eq!(b.width(), 2);
        assert_eq!(b.height(), 2);
    }

    #[test]
    fn test_new_note_defaults() {
        let n = DetectedNote::new(BoundingBox::new(5, 6, 7, 8), 0.9, NoteClass(0));
        assert_eq!(n.duration, "quarter");
        assert_eq!(n.pitch, None);
        assert_eq!(n.pitch_y(), 6);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(NoteClass(0).name(), "notehead");
        assert_eq!(NoteClass(99).name(), "symbol");
    }
}
