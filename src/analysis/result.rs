//! Analysis result types
//!
//! The complete record handed to rendering and persistence collaborators.
//! Every field is plain data (numbers, strings, booleans, sequences), so
//! the whole record serializes to nested maps without opaque objects.

use serde::{Deserialize, Serialize};

use crate::features::chord::{ChordFrame, ChordTransition};
use crate::features::key::KeyDetectionResult;
use crate::features::melody::MelodyAnalysis;
use crate::features::rhythm::RhythmAnalysis;

/// Basic piece metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicInfo {
    /// Instrument display names, in piece order
    pub instruments: Vec<String>,

    /// Total note count, percussion included
    pub total_notes: usize,

    /// Total piece duration in seconds
    pub duration: f32,
}

/// Time signature in effect at the start of the piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignature {
    /// Beats per bar
    pub numerator: u32,

    /// Beat unit (4 = quarter note)
    pub denominator: u32,
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self {
            numerator: 4,
            denominator: 4,
        }
    }
}

/// Harmony analysis: recognized chords and their statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonyAnalysis {
    /// Recognized chord sequence, one frame per analysis window
    pub chords: Vec<ChordFrame>,

    /// Chord transitions ranked by frequency
    pub progressions: Vec<ChordTransition>,

    /// The 12 x T chromagram the chords were matched against
    pub chromagram: Vec<Vec<f32>>,

    /// Chromagram frame times in seconds
    pub chroma_times: Vec<f32>,
}

/// Run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,

    /// Engine version that produced the result
    pub algorithm_version: String,
}

/// Complete analysis result for one piece
///
/// Degraded branches stay distinguishable: an undetermined key carries
/// confidence 0, an empty melody carries empty sequences, failed beat
/// detection carries an empty beat list. Nothing is silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Basic piece metadata
    pub basic: BasicInfo,

    /// Detected key and its confidence
    pub key: KeyDetectionResult,

    /// Scale note names of the detected key, tonic first, sharp-spelled
    pub scale_notes: Vec<String>,

    /// First time signature of the piece, 4/4 when none is present
    pub time_signature: TimeSignature,

    /// BPM of the first tempo event, `None` when the piece has none
    pub initial_tempo_bpm: Option<f32>,

    /// Rhythm analysis
    pub rhythm: RhythmAnalysis,

    /// Harmony analysis
    pub harmony: HarmonyAnalysis,

    /// Melody analysis
    pub melody: MelodyAnalysis,

    /// Raw duration-weighted pitch-class profile
    pub pitch_class_profile: [f32; 12],

    /// Run metadata
    pub metadata: AnalysisMetadata,
}
