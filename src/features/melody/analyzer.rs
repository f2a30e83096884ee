//! Melody analysis
//!
//! Treats all non-percussion notes, ordered by onset, as one melodic line
//! and derives its interval and contour sequences. No voice separation is
//! attempted; simultaneous notes keep their source order.

use serde::{Deserialize, Serialize};

use crate::io::events::NoteEvent;

/// One melodic note (percussion excluded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MelodyNote {
    /// MIDI pitch (0-127)
    pub pitch: u8,

    /// Onset time in seconds
    pub start: f32,

    /// Release time in seconds
    pub end: f32,

    /// Velocity (0-127)
    pub velocity: u8,

    /// Program number of the source instrument
    pub instrument: u32,
}

/// Direction of one melodic step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContourStep {
    /// Next note is higher
    Up,
    /// Next note is lower
    Down,
    /// Next note repeats the pitch
    Same,
}

/// Melody analysis result
///
/// For N notes both `intervals` and `contour` have length N-1; all fields
/// are empty/undetermined when the piece has no non-percussion notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MelodyAnalysis {
    /// Non-percussion notes sorted by onset (stable for simultaneous onsets)
    pub notes: Vec<MelodyNote>,

    /// Signed semitone difference between consecutive notes
    pub intervals: Vec<i32>,

    /// Up/down/same direction of each consecutive pair
    pub contour: Vec<ContourStep>,

    /// Lowest and highest pitch, `None` when there are no notes
    pub pitch_range: Option<(u8, u8)>,

    /// Mean velocity over the melody notes, 0.0 when there are none
    pub mean_velocity: f32,
}

/// Analyze the melodic content of a note list
pub fn analyze_melody(notes: &[NoteEvent]) -> MelodyAnalysis {
    let mut melody: Vec<MelodyNote> = notes
        .iter()
        .filter(|n| !n.is_percussion)
        .map(|n| MelodyNote {
            pitch: n.pitch,
            start: n.start,
            end: n.end,
            velocity: n.velocity,
            instrument: n.instrument,
        })
        .collect();

    // Stable: simultaneous onsets keep their original relative order
    melody.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(std::cmp::Ordering::Equal));

    log::debug!("Analyzing melody over {} non-percussion notes", melody.len());

    if melody.is_empty() {
        return MelodyAnalysis {
            notes: melody,
            intervals: vec![],
            contour: vec![],
            pitch_range: None,
            mean_velocity: 0.0,
        };
    }

    let mut intervals = Vec::with_capacity(melody.len() - 1);
    let mut contour = Vec::with_capacity(melody.len() - 1);
    for pair in melody.windows(2) {
        let delta = pair[1].pitch as i32 - pair[0].pitch as i32;
        intervals.push(delta);
        contour.push(match delta {
            d if d > 0 => ContourStep::Up,
            d if d < 0 => ContourStep::Down,
            _ => ContourStep::Same,
        });
    }

    let lowest = melody.iter().map(|n| n.pitch).min().unwrap_or(0);
    let highest = melody.iter().map(|n| n.pitch).max().unwrap_or(0);
    let mean_velocity =
        melody.iter().map(|n| n.velocity as f32).sum::<f32>() / melody.len() as f32;

    MelodyAnalysis {
        notes: melody,
        intervals,
        contour,
        pitch_range: Some((lowest, highest)),
        mean_velocity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(pitch: u8, start: f32, velocity: u8, is_percussion: bool) -> NoteEvent {
        NoteEvent {
            pitch,
            start,
            end: start + 0.5,
            velocity,
            instrument: 0,
            is_percussion,
        }
    }

    #[test]
    fn test_intervals_and_contour_lengths() {
        let notes = [
            note(60, 0.0, 100, false),
            note(64, 1.0, 100, false),
            note(62, 2.0, 100, false),
            note(62, 3.0, 100, false),
        ];
        let melody = analyze_melody(&notes);
        assert_eq!(melody.notes.len(), 4);
        assert_eq!(melody.intervals.len(), 3);
        assert_eq!(melody.contour.len(), 3);
        assert_eq!(melody.intervals, vec![4, -2, 0]);
        assert_eq!(
            melody.contour,
            vec![ContourStep::Up, ContourStep::Down, ContourStep::Same]
        );
    }

    #[test]
    fn test_percussion_is_excluded() {
        let notes = [
            note(60, 0.0, 100, false),
            note(36, 0.5, 120, true),
            note(64, 1.0, 100, false),
        ];
        let melody = analyze_melody(&notes);
        assert_eq!(melody.notes.len(), 2);
        assert_eq!(melody.intervals, vec![4]);
    }

    #[test]
    fn test_sorted_by_onset_not_source_order() {
        let notes = [note(64, 1.0, 100, false), note(60, 0.0, 100, false)];
        let melody = analyze_melody(&notes);
        assert_eq!(melody.notes[0].pitch, 60);
        assert_eq!(melody.intervals, vec![4]);
        assert_eq!(melody.contour, vec![ContourStep::Up]);
    }

    #[test]
    fn test_simultaneous_onsets_keep_source_order() {
        let notes = [note(67, 0.0, 100, false), note(60, 0.0, 100, false)];
        let melody = analyze_melody(&notes);
        assert_eq!(melody.notes[0].pitch, 67);
        assert_eq!(melody.intervals, vec![-7]);
    }

    #[test]
    fn test_pitch_range_and_mean_velocity() {
        let notes = [
            note(55, 0.0, 80, false),
            note(72, 1.0, 100, false),
            note(60, 2.0, 90, false),
        ];
        let melody = analyze_melody(&notes);
        assert_eq!(melody.pitch_range, Some((55, 72)));
        assert!((melody.mean_velocity - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_note_has_empty_sequences() {
        let melody = analyze_melody(&[note(60, 0.0, 100, false)]);
        assert_eq!(melody.notes.len(), 1);
        assert!(melody.intervals.is_empty());
        assert!(melody.contour.is_empty());
        assert_eq!(melody.pitch_range, Some((60, 60)));
    }

    #[test]
    fn test_no_melodic_notes_is_undetermined() {
        let melody = analyze_melody(&[note(36, 0.0, 120, true)]);
        assert!(melody.notes.is_empty());
        assert!(melody.intervals.is_empty());
        assert!(melody.contour.is_empty());
        assert_eq!(melody.pitch_range, None);
        assert_eq!(melody.mean_velocity, 0.0);
    }

    #[test]
    fn test_contour_serializes_lowercase() {
        let json = serde_json::to_string(&ContourStep::Up).unwrap();
        assert_eq!(json, "\"up\"");
    }
}
