//! Staff line geometry
//!
//! A `StaffLineSet` is the ordered list of y-coordinates of the horizontal
//! staff lines found in one score image. It is computed fresh per image by
//! the locator and never mutated afterward.

use serde::{Deserialize, Serialize};

/// A full 5-line staff; fewer lines means detection was partial
pub const STANDARD_STAFF_LINES: usize = 5;

/// Index of the middle line of a 5-line staff, used as the pitch reference
pub const REFERENCE_LINE_INDEX: usize = 2;

/// Strictly ascending, duplicate-free staff line y-coordinates
///
/// Serializes as a plain array of ys; deserializing re-establishes the
/// ordering invariant, so a hand-built JS array is safe input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct StaffLineSet {
    ys: Vec<u32>,
}

impl StaffLineSet {
    /// Empty set: the image had no rows strong enough to be staff lines
    pub fn empty() -> Self {
        Self { ys: Vec::new() }
    }

    /// Build from y-coordinates in any order; sorts and deduplicates
    pub fn from_ys(mut ys: Vec<u32>) -> Self {
        ys.sort_unstable();
        ys.dedup();
        Self { ys }
    }

    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    /// The y-coordinates, ascending
    pub fn ys(&self) -> &[u32] {
        &self.ys
    }

    /// Whether this looks like a complete standard staff
    pub fn is_full_staff(&self) -> bool {
        self.ys.len() >= STANDARD_STAFF_LINES
    }

    /// Mean gap between adjacent staff lines, or `None` for fewer than 2 lines
    ///
    /// Equals `(last - first) / (n - 1)` since interior terms telescope.
    pub fn mean_spacing(&self) -> Option<f64> {
        if self.ys.len() < 2 {
            return None;
        }
        let first = self.ys[0] as f64;
        let last = self.ys[self.ys.len() - 1] as f64;
        Some((last - first) / (self.ys.len() - 1) as f64)
    }

    /// The reference (middle) line y-coordinate, if at least 3 lines exist
    pub fn reference_line(&self) -> Option<u32> {
        self.ys.get(REFERENCE_LINE_INDEX).copied()
    }
}

impl From<Vec<u32>> for StaffLineSet {
    fn from(ys: Vec<u32>) -> Self {
        Self::from_ys(ys)
    }
}

impl From<StaffLineSet> for Vec<u32> {
    fn from(set: StaffLineSet) -> Self {
        set.ys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ys_sorts_and_dedups() {
        let set = StaffLineSet::from_ys(vec![50, 10, 30, 30, 90, 70]);
        assert_eq!(set.ys(), &[10, 30, 50, 70, 90]);
    }

    #[test]
    fn test_mean_spacing() {
        let set = StaffLineSet::from_ys(vec![10, 30, 50, 70, 90]);
        assert_eq!(set.mean_spacing(), Some(20.0));
    }

    #[test]
    fn test_mean_spacing_needs_two_lines() {
        assert_eq!(StaffLineSet::from_ys(vec![40]).mean_spacing(), None);
        assert_eq!(StaffLineSet::empty().mean_spacing(), None);
    }

    #[test]
    fn test_reference_line() {
        let set = StaffLineSet::from_ys(vec![10, 30, 50, 70, 90]);
        assert_eq!(set.reference_line(), Some(50));
        assert_eq!(StaffLineSet::from_ys(vec![10, 30]).reference_line(), None);
    }

    #[test]
    fn test_full_staff() {
        assert!(StaffLineSet::from_ys(vec![10, 30, 50, 70, 90]).is_full_staff());
        assert!(!StaffLineSet::from_ys(vec![10, 30, 50]).is_full_staff());
    }
}
