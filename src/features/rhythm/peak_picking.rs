//! Peak detection for the note-density series
//!
//! Finds local maxima that clear a minimum height and are separated by a
//! minimum distance. The density series is integer-valued, so flat-topped
//! peaks are common; a plateau counts as one peak at its midpoint.

use crate::error::AnalysisError;

/// Find peaks in a signal
///
/// # Arguments
///
/// * `signal` - Signal to find peaks in
/// * `min_height` - Minimum peak height (inclusive)
/// * `min_distance` - Minimum distance between kept peaks, in samples
///
/// # Returns
///
/// Peak indices in ascending order.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` when `min_distance` is 0. Callers
/// that only need a best-effort answer map any error to an empty result.
///
/// # Algorithm
///
/// 1. Find all local maxima (plateaus report their midpoint)
/// 2. Filter by height
/// 3. Enforce minimum distance (keep the higher peak of any close pair)
pub fn find_peaks(
    signal: &[f32],
    min_height: f32,
    min_distance: usize,
) -> Result<Vec<usize>, AnalysisError> {
    if min_distance == 0 {
        return Err(AnalysisError::InvalidInput(
            "min_distance must be at least 1".to_string(),
        ));
    }

    log::debug!(
        "Finding peaks in signal of length {}, min_height={:.3}, min_distance={}",
        signal.len(),
        min_height,
        min_distance
    );

    if signal.len() < 3 {
        // Need at least 3 points for local maximum detection
        return Ok(vec![]);
    }

    // Find local maxima; a run of equal values bounded by lower neighbors
    // on both sides is one peak at the run's midpoint.
    let mut peaks: Vec<(usize, f32)> = Vec::new();
    let last = signal.len() - 1;
    let mut i = 1usize;
    while i < last {
        if signal[i - 1] < signal[i] {
            let mut ahead = i + 1;
            while ahead < last && signal[ahead] == signal[i] {
                ahead += 1;
            }
            if signal[ahead] < signal[i] {
                let midpoint = (i + ahead - 1) / 2;
                if signal[i] >= min_height {
                    peaks.push((midpoint, signal[i]));
                }
                i = ahead;
                continue;
            }
        }
        i += 1;
    }

    // Enforce minimum distance, keeping the highest peaks
    if peaks.len() > 1 {
        peaks.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut kept: Vec<(usize, f32)> = Vec::new();
        for (idx, value) in peaks {
            let too_close = kept.iter().any(|(kept_idx, _)| {
                (idx as i64 - *kept_idx as i64).abs() < min_distance as i64
            });
            if !too_close {
                kept.push((idx, value));
            }
        }
        peaks = kept;
    }

    let mut indices: Vec<usize> = peaks.into_iter().map(|(idx, _)| idx).collect();
    indices.sort_unstable();

    log::debug!("Found {} peaks", indices.len());

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_peaks_basic() {
        let signal = vec![0.0, 0.5, 1.0, 0.7, 0.3, 0.9, 0.2];
        let peaks = find_peaks(&signal, 0.5, 2).unwrap();
        assert_eq!(peaks, vec![2, 5]);
    }

    #[test]
    fn test_find_peaks_empty_and_short() {
        assert!(find_peaks(&[], 0.5, 2).unwrap().is_empty());
        assert!(find_peaks(&[1.0, 2.0], 0.5, 2).unwrap().is_empty());
    }

    #[test]
    fn test_find_peaks_zero_distance_is_error() {
        let signal = vec![0.0, 1.0, 0.0];
        assert!(find_peaks(&signal, 0.0, 0).is_err());
    }

    #[test]
    fn test_find_peaks_height_filter() {
        let signal = vec![0.0, 0.4, 0.0, 0.8, 0.0];
        let peaks = find_peaks(&signal, 0.5, 1).unwrap();
        assert_eq!(peaks, vec![3]);
    }

    #[test]
    fn test_find_peaks_height_is_inclusive() {
        let signal = vec![0.0, 0.5, 0.0];
        let peaks = find_peaks(&signal, 0.5, 1).unwrap();
        assert_eq!(peaks, vec![1]);
    }

    #[test]
    fn test_find_peaks_plateau_midpoint() {
        let signal = vec![0.0, 2.0, 2.0, 2.0, 0.0, 0.0];
        let peaks = find_peaks(&signal, 1.0, 1).unwrap();
        assert_eq!(peaks, vec![2]);
    }

    #[test]
    fn test_find_peaks_min_distance_keeps_higher() {
        let signal = vec![0.0, 0.5, 1.0, 0.8, 0.9, 0.3, 0.1];
        // Peaks at 2 (1.0) and 4 (0.9) are 2 apart; distance 3 drops index 4
        let peaks = find_peaks(&signal, 0.3, 3).unwrap();
        assert_eq!(peaks, vec![2]);
    }

    #[test]
    fn test_find_peaks_endpoints_are_not_peaks() {
        // Monotonic edges cannot be confirmed as maxima
        let signal = vec![2.0, 1.0, 0.0, 1.0, 2.0];
        let peaks = find_peaks(&signal, 0.5, 1).unwrap();
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_find_peaks_returns_ascending_indices() {
        let signal = vec![0.0, 0.6, 0.0, 1.0, 0.0, 0.8, 0.0];
        let peaks = find_peaks(&signal, 0.1, 1).unwrap();
        assert_eq!(peaks, vec![1, 3, 5]);
    }
}
