//! Pitch-class profile
//!
//! Reduces the whole note list to a duration-weighted 12-bin histogram
//! over pitch classes, normalized to sum to 1. The profile is the input
//! to key detection and is reported raw in the analysis result.

use crate::io::events::NoteEvent;

/// Compute the duration-weighted pitch-class profile
///
/// Each note adds its duration (`end - start`) to the bin `pitch % 12`.
/// The histogram is normalized to sum to 1.0; when the total duration is
/// zero (no notes, or only zero-length notes) the profile is all-zero and
/// callers must treat it as undetermined rather than as evidence of C.
pub fn pitch_class_profile(notes: &[NoteEvent]) -> [f32; 12] {
    let mut histogram = [0.0f32; 12];
    for note in notes {
        histogram[note.pitch_class()] += note.duration();
    }

    let total: f32 = histogram.iter().sum();
    if total > 0.0 {
        for bin in histogram.iter_mut() {
            *bin /= total;
        }
    }

    log::debug!(
        "Pitch-class profile from {} notes (total duration {:.3}s)",
        notes.len(),
        total
    );

    histogram
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(pitch: u8, start: f32, end: f32) -> NoteEvent {
        NoteEvent {
            pitch,
            start,
            end,
            velocity: 100,
            instrument: 0,
            is_percussion: false,
        }
    }

    #[test]
    fn test_profile_sums_to_one() {
        let notes = [
            note(60, 0.0, 1.0),
            note(64, 1.0, 2.0),
            note(67, 2.0, 2.5),
        ];
        let profile = pitch_class_profile(&notes);
        let sum: f32 = profile.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6, "profile should sum to 1, got {}", sum);
    }

    #[test]
    fn test_profile_duration_weighting() {
        // C for 3 seconds, E for 1 second
        let notes = [note(60, 0.0, 3.0), note(64, 0.0, 1.0)];
        let profile = pitch_class_profile(&notes);
        assert!((profile[0] - 0.75).abs() < 1e-6);
        assert!((profile[4] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_profile_folds_octaves() {
        let notes = [note(60, 0.0, 1.0), note(72, 0.0, 1.0)];
        let profile = pitch_class_profile(&notes);
        assert!((profile[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_input_yields_all_zero() {
        let profile = pitch_class_profile(&[]);
        assert_eq!(profile, [0.0; 12]);
    }

    #[test]
    fn test_zero_duration_notes_yield_all_zero() {
        let notes = [note(60, 1.0, 1.0), note(64, 2.0, 2.0)];
        let profile = pitch_class_profile(&notes);
        assert_eq!(profile, [0.0; 12]);
    }
}
