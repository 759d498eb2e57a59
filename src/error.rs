//! Error types for the recognition core
//!
//! Three failure classes, each distinct so callers can choose between
//! retrying line detection with different parameters and reporting the
//! image as unreadable. Nothing here is retried automatically.

use thiserror::Error;

/// Top-level error type for staff-line location and pitch mapping
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    /// The input image is malformed (zero width or height)
    #[error("invalid input image: {0}")]
    InvalidInput(String),

    /// Pitch mapping needs at least 3 staff lines (index 2 is the reference line)
    #[error("insufficient staff lines: got {got}, need at least 3")]
    InsufficientStaffLines { got: usize },

    /// All staff lines coincide, so the half-spacing divisor is zero
    #[error("degenerate staff spacing: staff lines do not span any vertical distance")]
    DegenerateStaffSpacing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_distinct() {
        let a = ScanError::InsufficientStaffLines { got: 2 };
        let b = ScanError::DegenerateStaffSpacing;
        assert_ne!(a, b);
    }

    #[test]
    fn test_error_messages() {
        let e = ScanError::InsufficientStaffLines { got: 2 };
        assert_eq!(e.to_string(), "insufficient staff lines: got 2, need at least 3");
    }
}
