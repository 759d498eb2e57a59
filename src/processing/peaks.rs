//! 1D peak finding with height and minimum-distance constraints
//!
//! Finds local maxima in a projection profile while suppressing maxima
//! that crowd each other: within the exclusion radius the taller peak
//! wins, and equal heights resolve to the first in scan order. Plateaus
//! (runs of equal values higher than both neighbors) count as a single
//! peak reported at the run's midpoint.

/// A local maximum in a 1D profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peak {
    /// Index into the profile (plateau midpoint for flat peaks)
    pub index: usize,
    pub value: u64,
}

/// Find peaks at least `min_height` tall and at least `min_distance` apart
///
/// Returns peak indices sorted ascending. Profile edges never count as
/// peaks; a plateau touching the boundary has no outer neighbor to beat.
pub fn find_peaks(profile: &[u64], min_height: u64, min_distance: usize) -> Vec<Peak> {
    let candidates = local_maxima(profile);

    // Tallest-first suppression pass; scan order breaks ties.
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        candidates[b]
            .value
            .cmp(&candidates[a].value)
            .then(candidates[a].index.cmp(&candidates[b].index))
    });

    let mut keep = vec![true; candidates.len()];
    for &i in &order {
        if !keep[i] {
            continue;
        }
        for (j, other) in candidates.iter().enumerate() {
            if j != i && keep[j] && other.index.abs_diff(candidates[i].index) < min_distance {
                keep[j] = false;
            }
        }
    }

    let mut peaks: Vec<Peak> = candidates
        .into_iter()
        .zip(keep)
        .filter(|(p, kept)| *kept && p.value >= min_height)
        .map(|(p, _)| p)
        .collect();
    peaks.sort_by_key(|p| p.index);
    peaks
}

/// All strict local maxima, with flat tops collapsed to their midpoint
fn local_maxima(profile: &[u64]) -> Vec<Peak> {
    let mut peaks = Vec::new();
    let n = profile.len();
    let mut i = 1;
    while n >= 3 && i < n - 1 {
        if profile[i] <= profile[i - 1] {
            i += 1;
            continue;
        }
        // Rising edge found; walk the plateau (if any) to its right edge.
        let left = i;
        let mut right = i;
        while right + 1 < n && profile[right + 1] == profile[left] {
            right += 1;
        }
        if right + 1 < n && profile[right + 1] < profile[left] {
            peaks.push(Peak {
                index: (left + right) / 2,
                value: profile[left],
            });
        }
        i = right + 1;
    }
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(peaks: &[Peak]) -> Vec<usize> {
        peaks.iter().map(|p| p.index).collect()
    }

    #[test]
    fn test_simple_peaks() {
        let profile = [0, 5, 0, 0, 0, 0, 7, 0];
        let peaks = find_peaks(&profile, 1, 3);
        assert_eq!(indices(&peaks), vec![1, 6]);
        assert_eq!(peaks[1].value, 7);
    }

    #[test]
    fn test_height_threshold_filters() {
        let profile = [0, 5, 0, 0, 0, 0, 7, 0];
        let peaks = find_peaks(&profile, 6, 1);
        assert_eq!(indices(&peaks), vec![6]);
    }

    #[test]
    fn test_no_peaks_above_threshold() {
        let profile = [1, 2, 1, 2, 1];
        assert!(find_peaks(&profile, 100, 1).is_empty());
    }

    #[test]
    fn test_min_distance_keeps_taller() {
        // Peaks at 2 (value 5) and 4 (value 9), 2 apart: the taller wins.
        let profile = [0, 0, 5, 0, 9, 0, 0];
        let peaks = find_peaks(&profile, 1, 3);
        assert_eq!(indices(&peaks), vec![4]);
    }

    #[test]
    fn test_min_distance_tie_goes_to_first() {
        let profile = [0, 0, 9, 0, 9, 0, 0];
        let peaks = find_peaks(&profile, 1, 3);
        assert_eq!(indices(&peaks), vec![2]);
    }

    #[test]
    fn test_plateau_reports_midpoint() {
        // Flat top over indices 2..=4 reports index 3.
        let profile = [0, 1, 8, 8, 8, 1, 0];
        let peaks = find_peaks(&profile, 1, 1);
        assert_eq!(indices(&peaks), vec![3]);
    }

    #[test]
    fn test_edges_are_not_peaks() {
        let profile = [9, 0, 0, 0, 9];
        assert!(find_peaks(&profile, 1, 1).is_empty());
    }

    #[test]
    fn test_monotone_profile_has_no_peaks() {
        let profile = [1, 2, 3, 4, 5];
        assert!(find_peaks(&profile, 0, 1).is_empty());
    }

    #[test]
    fn test_output_is_sorted_and_spaced() {
        let profile: Vec<u64> = (0..200)
            .map(|i| if i % 40 == 0 && i > 0 { 100 + i as u64 } else { 0 })
            .collect();
        let peaks = find_peaks(&profile, 50, 20);
        let idx = indices(&peaks);
        for w in idx.windows(2) {
            assert!(w[1] > w[0]);
            assert!(w[1] - w[0] >= 20);
        }
    }
}
