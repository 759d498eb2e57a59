/// The fixed pitch vocabulary used by position-based pitch mapping
///
/// One octave of natural pitches spanning the treble staff, indexed by
/// signed distance in half-line-spacing steps from the staff's middle
/// line. Index 0 is the lowest pitch (C4), index 7 the highest (C5).
/// The mapper clamps out-of-range indices; `from_index` itself is exact.

use serde::{Deserialize, Serialize};

/// Number of entries in the pitch vocabulary
pub const VOCABULARY_SIZE: usize = 8;

/// Offset placing the staff's reference (middle) line at G4
pub const REFERENCE_OFFSET: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchLabel {
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
    B4,
    C5,
}

impl PitchLabel {
    /// The full vocabulary in ascending pitch order
    pub const ALL: [PitchLabel; VOCABULARY_SIZE] = [
        PitchLabel::C4,
        PitchLabel::D4,
        PitchLabel::E4,
        PitchLabel::F4,
        PitchLabel::G4,
        PitchLabel::A4,
        PitchLabel::B4,
        PitchLabel::C5,
    ];

    /// Look up a vocabulary entry by index; `None` if out of range
    pub fn from_index(index: usize) -> Option<PitchLabel> {
        Self::ALL.get(index).copied()
    }

    /// Position of this pitch within the vocabulary
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// String form used in the output document ("C4".."C5")
    pub fn as_str(&self) -> &'static str {
        match self {
            PitchLabel::C4 => "C4",
            PitchLabel::D4 => "D4",
            PitchLabel::E4 => "E4",
            PitchLabel::F4 => "F4",
            PitchLabel::G4 => "G4",
            PitchLabel::A4 => "A4",
            PitchLabel::B4 => "B4",
            PitchLabel::C5 => "C5",
        }
    }

    /// Parse the string form back into a vocabulary entry
    pub fn from_str_label(s: &str) -> Option<PitchLabel> {
        Self::ALL.iter().copied().find(|p| p.as_str() == s)
    }
}

impl std::fmt::Display for PitchLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order() {
        assert_eq!(PitchLabel::from_index(0), Some(PitchLabel::C4));
        assert_eq!(PitchLabel::from_index(4), Some(PitchLabel::G4));
        assert_eq!(PitchLabel::from_index(7), Some(PitchLabel::C5));
        assert_eq!(PitchLabel::from_index(8), None);
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, p) in PitchLabel::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(PitchLabel::from_index(i), Some(*p));
        }
    }

    #[test]
    fn test_as_str() {
        assert_eq!(PitchLabel::G4.as_str(), "G4");
        assert_eq!(PitchLabel::C5.to_string(), "C5");
    }

    #[test]
    fn test_from_str_label() {
        assert_eq!(PitchLabel::from_str_label("A4"), Some(PitchLabel::A4));
        assert_eq!(PitchLabel::from_str_label("H4"), None);
    }
}
