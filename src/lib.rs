//! # Cantus
//!
//! A symbolic music analysis engine: recovers key, harmonic progression,
//! rhythmic pulse and melodic shape from a decoded note-event stream.
//!
//! ## Features
//!
//! - **Key detection**: Pearson correlation of the duration-weighted
//!   pitch-class profile against 24 major/minor scale templates
//! - **Chord recognition**: block-averaged chromagram matched against a
//!   264-entry chord template catalog, with progression counting
//! - **Rhythm**: average tempo, active-note density, peak-picked beats
//! - **Melody**: interval and contour sequences over the melodic line
//!
//! ## Quick Start
//!
//! ```
//! use cantus::{analyze, AnalysisConfig};
//! use cantus::io::{NoteEvent, Piece};
//!
//! let piece = Piece {
//!     notes: vec![NoteEvent {
//!         pitch: 60,
//!         start: 0.0,
//!         end: 1.0,
//!         velocity: 100,
//!         instrument: 0,
//!         is_percussion: false,
//!     }],
//!     ..Piece::default()
//! };
//!
//! let result = analyze(&piece, AnalysisConfig::default())?;
//! println!("Key: {} (confidence: {:.2})", result.key.name, result.key.confidence);
//! println!("Tempo: {:.1} BPM", result.rhythm.avg_tempo);
//! # Ok::<(), cantus::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline fans one immutable [`io::Piece`] out to four independent,
//! side-effect-free branches and merges their outputs:
//!
//! ```text
//! Piece -> PitchClassProfile -> KeyDetector          (key)
//! Piece -> Chromagram -> ChordRecognizer -> Counter  (harmony)
//! Piece -> RhythmAnalyzer                            (rhythm)
//! Piece -> MelodyAnalyzer                            (melody)
//! ```
//!
//! Only loading a piece can fail a run; every analysis branch degrades to
//! an empty/neutral result on missing or degenerate input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;

// Re-export main types
pub use analysis::result::{AnalysisMetadata, AnalysisResult, BasicInfo, HarmonyAnalysis, TimeSignature};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::key::KeyDetectionResult;

use features::chord::{count_transitions, recognize_chords, ChordTemplates};
use features::chroma::build_chromagram;
use features::key::{detect_key, KeyTemplates};
use features::melody::analyze_melody;
use features::piano_roll::PianoRoll;
use features::profile::pitch_class_profile;
use features::rhythm::analyze_rhythm;
use io::events::Piece;

/// Main analysis function
///
/// Runs the full pipeline over one decoded piece and returns the merged
/// result record.
///
/// # Arguments
///
/// * `piece` - The frozen note-event snapshot produced by a note source
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// `AnalysisResult` with key, harmony, rhythm, melody and the raw
/// pitch-class profile. An empty piece is not an error: each branch
/// reports its neutral result (all-zero profile, confidence 0, empty
/// sequences).
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for malformed events: notes with
/// `end < start`, negative or non-finite times, or non-positive tempo
/// values.
pub fn analyze(piece: &Piece, config: AnalysisConfig) -> Result<AnalysisResult, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::info!(
        "Starting analysis: {} notes, {} instruments",
        piece.note_count(),
        piece.instruments.len()
    );

    validate_piece(piece)?;

    // Key detection
    log::info!("Detecting musical key");
    let profile = pitch_class_profile(&piece.notes);
    let key_templates = KeyTemplates::new();
    let key = detect_key(&profile, &key_templates);
    let scale_notes = key_templates.scale_note_names(&key.name);

    // Harmony
    log::info!("Analyzing harmony");
    let fs = config.frame_rate();
    let roll = PianoRoll::from_notes(&piece.notes, piece.end_time(), fs);
    let chromagram = build_chromagram(&roll);
    let chord_templates = ChordTemplates::new();
    let chords = recognize_chords(&chromagram, config.window_seconds, &chord_templates);
    let progressions = count_transitions(&chords);

    // Rhythm
    log::info!("Analyzing rhythm");
    let rhythm = analyze_rhythm(piece, &config);

    // Melody
    log::info!("Analyzing melody");
    let melody = analyze_melody(&piece.notes);

    let time_signature = piece
        .time_signatures
        .first()
        .map(|ts| TimeSignature {
            numerator: ts.numerator,
            denominator: ts.denominator,
        })
        .unwrap_or_default();

    let initial_tempo_bpm = piece.tempo_changes.first().map(|t| t.bpm);

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    log::info!("Analysis complete in {:.2} ms", processing_time_ms);

    Ok(AnalysisResult {
        basic: BasicInfo {
            instruments: piece.instruments.iter().map(|i| i.display_name()).collect(),
            total_notes: piece.note_count(),
            duration: piece.end_time(),
        },
        key,
        scale_notes,
        time_signature,
        initial_tempo_bpm,
        rhythm,
        harmony: HarmonyAnalysis {
            chords,
            progressions,
            chromagram: chromagram.rows,
            chroma_times: chromagram.times,
        },
        melody,
        pitch_class_profile: profile,
        metadata: AnalysisMetadata {
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}

/// Reject malformed events before any branch runs
fn validate_piece(piece: &Piece) -> Result<(), AnalysisError> {
    for (i, note) in piece.notes.iter().enumerate() {
        if !note.start.is_finite() || !note.end.is_finite() {
            return Err(AnalysisError::InvalidInput(format!(
                "note {} has non-finite times",
                i
            )));
        }
        if note.start < 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "note {} starts at negative time {}",
                i, note.start
            )));
        }
        if note.end < note.start {
            return Err(AnalysisError::InvalidInput(format!(
                "note {} ends ({}) before it starts ({})",
                i, note.end, note.start
            )));
        }
    }
    for (i, tempo) in piece.tempo_changes.iter().enumerate() {
        if !tempo.bpm.is_finite() || tempo.bpm <= 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "tempo change {} has non-positive bpm {}",
                i, tempo.bpm
            )));
        }
    }
    Ok(())
}
