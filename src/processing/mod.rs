//! The recognition pipeline's computational stages
//!
//! raw RGBA → [`preprocess`] → binarized image → [`staff_lines`] →
//! ordered staff line ys → [`pitch_mapping`] per detected note.
//! Everything here is a pure function over its inputs; callers may run
//! independent images on independent threads freely.

pub mod peaks;
pub mod pitch_mapping;
pub mod preprocess;
pub mod staff_lines;

pub use pitch_mapping::{map_pitch, map_pitch_on_staff};
pub use staff_lines::{find_staff_lines, horizontal_projection, MIN_LINE_DISTANCE};
