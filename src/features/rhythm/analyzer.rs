//! Rhythm analysis
//!
//! Tempo comes from the tempo-change events (unweighted mean); the pulse
//! comes from peak picking over the active-note density series. Beat
//! detection is best-effort: any failure leaves the beat list empty, which
//! callers must read as "not detected", never as "no rhythm".

use serde::{Deserialize, Serialize};

use super::peak_picking::find_peaks;
use crate::config::AnalysisConfig;
use crate::features::piano_roll::PianoRoll;
use crate::io::events::{Piece, TempoChangeEvent};

/// Rhythm analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhythmAnalysis {
    /// Unweighted mean of the tempo-change BPMs, or the configured default
    pub avg_tempo: f32,

    /// The piece's tempo-change series, as supplied
    pub tempo_changes: Vec<TempoChangeEvent>,

    /// Count of simultaneously active pitches per frame
    pub density: Vec<f32>,

    /// Start time of each density frame in seconds
    pub density_times: Vec<f32>,

    /// Detected beat times in seconds; empty when detection failed
    pub beat_times: Vec<f32>,

    /// Total piece duration in seconds
    pub total_duration: f32,
}

/// Analyze tempo, note density and beat positions
///
/// The density series samples the piano roll at the configured frame rate
/// (default 10 Hz). Beat candidates are density peaks at least
/// `floor(beat_interval * fs) / 2` frames apart with height at or above
/// the series mean, where `beat_interval = 60 / avg_tempo`. The peak
/// finder is fallible; every failure path (empty series, degenerate
/// distance) degrades to an empty beat list.
pub fn analyze_rhythm(piece: &Piece, config: &AnalysisConfig) -> RhythmAnalysis {
    let avg_tempo = if piece.tempo_changes.is_empty() {
        config.default_tempo_bpm
    } else {
        let sum: f32 = piece.tempo_changes.iter().map(|t| t.bpm).sum();
        sum / piece.tempo_changes.len() as f32
    };

    let fs = config.frame_rate();
    let total_duration = piece.end_time();
    let roll = PianoRoll::from_notes(&piece.notes, total_duration, fs);
    let density = roll.active_pitch_counts();
    let density_times = roll.times().to_vec();

    let beat_times = detect_beats(&density, &density_times, avg_tempo, fs);

    log::debug!(
        "Rhythm: avg tempo {:.1} BPM, {} density frames, {} beats",
        avg_tempo,
        density.len(),
        beat_times.len()
    );

    RhythmAnalysis {
        avg_tempo,
        tempo_changes: piece.tempo_changes.clone(),
        density,
        density_times,
        beat_times,
        total_duration,
    }
}

fn detect_beats(density: &[f32], times: &[f32], avg_tempo: f32, fs: f32) -> Vec<f32> {
    if avg_tempo <= 0.0 || density.is_empty() {
        return vec![];
    }

    let beat_interval = 60.0 / avg_tempo;
    let beat_frames = (beat_interval * fs) as usize;
    let min_distance = beat_frames / 2;
    let mean = density.iter().sum::<f32>() / density.len() as f32;

    match find_peaks(density, mean, min_distance) {
        Ok(peaks) => peaks.into_iter().map(|i| times[i]).collect(),
        Err(err) => {
            log::debug!("Beat detection failed, returning no beats: {}", err);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::events::NoteEvent;

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

    fn tempo(time: f32, bpm: f32) -> TempoChangeEvent {
        TempoChangeEvent { time, bpm }
    }

    #[test]
    fn test_avg_tempo_is_unweighted_mean() {
        let piece = Piece {
            tempo_changes: vec![tempo(0.0, 120.0), tempo(10.0, 140.0)],
            ..Piece::default()
        };
        let rhythm = analyze_rhythm(&piece, &AnalysisConfig::default());
        assert_eq!(rhythm.avg_tempo, 130.0);
    }

    #[test]
    fn test_default_tempo_without_events() {
        let piece = Piece {
            notes: vec![note(60, 0.0, 1.0)],
            ..Piece::default()
        };
        let rhythm = analyze_rhythm(&piece, &AnalysisConfig::default());
        assert_eq!(rhythm.avg_tempo, 120.0);
        assert!(rhythm.tempo_changes.is_empty());
    }

    #[test]
    fn test_empty_piece_degrades_everywhere() {
        let rhythm = analyze_rhythm(&Piece::default(), &AnalysisConfig::default());
        assert_eq!(rhythm.avg_tempo, 120.0);
        assert!(rhythm.density.is_empty());
        assert!(rhythm.beat_times.is_empty());
        assert_eq!(rhythm.total_duration, 0.0);
    }

    #[test]
    fn test_density_counts_active_notes() {
        let piece = Piece {
            notes: vec![note(60, 0.0, 2.0), note(64, 1.0, 2.0)],
            ..Piece::default()
        };
        let rhythm = analyze_rhythm(&piece, &AnalysisConfig::default());
        assert_eq!(rhythm.density.len(), 20);
        assert_eq!(rhythm.density[0], 1.0);
        assert_eq!(rhythm.density[15], 2.0);
    }

    #[test]
    fn test_beats_found_on_pulsed_density() {
        // Chords every half second on an otherwise thin texture: density
        // spikes at each onset should read as beats at 120 BPM.
        let mut notes = vec![note(48, 0.0, 8.0)];
        for i in 0..16 {
            let start = i as f32 * 0.5;
            notes.push(note(60, start, start + 0.1));
            notes.push(note(64, start, start + 0.1));
            notes.push(note(67, start, start + 0.1));
        }
        let piece = Piece {
            notes,
            tempo_changes: vec![tempo(0.0, 120.0)],
            ..Piece::default()
        };
        let rhythm = analyze_rhythm(&piece, &AnalysisConfig::default());
        assert!(
            rhythm.beat_times.len() >= 10,
            "expected a beat per spike, got {:?}",
            rhythm.beat_times
        );
        // Beats must land on spike onsets (multiples of 0.5s)
        for &t in &rhythm.beat_times {
            let frac = (t * 2.0).fract();
            assert!(frac.abs() < 1e-3, "beat at {} is off the grid", t);
        }
    }

    #[test]
    fn test_extreme_tempo_degrades_to_no_beats() {
        // Above 300 BPM the minimum peak distance collapses to zero at the
        // default 10 Hz rate; detection must degrade, not error.
        let piece = Piece {
            notes: vec![note(60, 0.0, 4.0)],
            tempo_changes: vec![tempo(0.0, 400.0)],
            ..Piece::default()
        };
        let rhythm = analyze_rhythm(&piece, &AnalysisConfig::default());
        assert!(rhythm.beat_times.is_empty());
    }

    #[test]
    fn test_total_duration_matches_piece_end() {
        let piece = Piece {
            notes: vec![note(60, 0.0, 3.5)],
            ..Piece::default()
        };
        let rhythm = analyze_rhythm(&piece, &AnalysisConfig::default());
        assert_eq!(rhythm.total_duration, 3.5);
    }
}
