//! Pitch mapping from vertical position
//!
//! On a staff, adjacent scale steps alternate between lines and spaces,
//! so one pitch step corresponds to half the line spacing. Measuring a
//! note's offset from the middle line in half-spacing units therefore
//! indexes directly into the pitch vocabulary.

use crate::error::ScanError;
use crate::models::pitch::{PitchLabel, REFERENCE_OFFSET, VOCABULARY_SIZE};
use crate::models::staff::REFERENCE_LINE_INDEX;
use crate::models::StaffLineSet;

/// Map a note's vertical pixel position to a pitch label
///
/// `staff_lines` are y-coordinates in ascending order. At least 3 are
/// required (entry 2 is the middle line of a standard staff) and they
/// must span some vertical distance; both preconditions fail explicitly
/// with distinct errors rather than producing NaN or indexing out of
/// bounds. The computed vocabulary index is clamped to the vocabulary
/// bounds, the one permitted soft correction.
pub fn map_pitch(y_position: f64, staff_lines: &[u32]) -> Result<PitchLabel, ScanError> {
    if staff_lines.len() < 3 {
        return Err(ScanError::InsufficientStaffLines {
            got: staff_lines.len(),
        });
    }

    // Mean of consecutive differences; interior terms telescope.
    let first = staff_lines[0] as f64;
    let last = staff_lines[staff_lines.len() - 1] as f64;
    let spacing = (last - first) / (staff_lines.len() - 1) as f64;
    if spacing <= 0.0 {
        return Err(ScanError::DegenerateStaffSpacing);
    }

    let reference = staff_lines[REFERENCE_LINE_INDEX] as f64;
    let distance = (reference - y_position) / (spacing / 2.0);

    let index = (distance.round() as i64 + REFERENCE_OFFSET).clamp(0, VOCABULARY_SIZE as i64 - 1);

    // The clamp keeps the index within the vocabulary
    Ok(PitchLabel::from_index(index as usize).unwrap_or(PitchLabel::C4))
}

/// [`map_pitch`] over an already-validated staff line set
pub fn map_pitch_on_staff(
    y_position: f64,
    staff_lines: &StaffLineSet,
) -> Result<PitchLabel, ScanError> {
    map_pitch(y_position, staff_lines.ys())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAFF: [u32; 5] = [10, 30, 50, 70, 90];

    #[test]
    fn test_reference_line_maps_to_g4() {
        assert_eq!(map_pitch(50.0, &STAFF).unwrap(), PitchLabel::G4);
    }

    #[test]
    fn test_topmost_line_clamps_to_c5() {
        // 4 half-spacings above the reference, index 8 clamped to 7.
        assert_eq!(map_pitch(10.0, &STAFF).unwrap(), PitchLabel::C5);
    }

    #[test]
    fn test_below_staff_clamps_to_c4() {
        assert_eq!(map_pitch(130.0, &STAFF).unwrap(), PitchLabel::C4);
    }

    #[test]
    fn test_each_half_spacing_is_one_step() {
        assert_eq!(map_pitch(60.0, &STAFF).unwrap(), PitchLabel::F4);
        assert_eq!(map_pitch(40.0, &STAFF).unwrap(), PitchLabel::A4);
        assert_eq!(map_pitch(30.0, &STAFF).unwrap(), PitchLabel::B4);
    }

    #[test]
    fn test_intermediate_position_rounds_to_nearest() {
        // 4 pixels above the reference line is 0.4 steps, rounding to G4.
        assert_eq!(map_pitch(46.0, &STAFF).unwrap(), PitchLabel::G4);
        // 6 pixels is 0.6 steps, rounding to A4.
        assert_eq!(map_pitch(44.0, &STAFF).unwrap(), PitchLabel::A4);
    }

    #[test]
    fn test_zero_spacing_is_degenerate() {
        assert_eq!(
            map_pitch(50.0, &[50, 50, 50]),
            Err(ScanError::DegenerateStaffSpacing)
        );
    }

    #[test]
    fn test_too_few_lines_is_rejected() {
        assert_eq!(
            map_pitch(20.0, &[10, 30]),
            Err(ScanError::InsufficientStaffLines { got: 2 })
        );
    }

    #[test]
    fn test_staff_set_wrapper_agrees() {
        let set = StaffLineSet::from_ys(STAFF.to_vec());
        assert_eq!(map_pitch_on_staff(50.0, &set).unwrap(), PitchLabel::G4);
    }
}
