//! Chord recognition modules
//!
//! Recognize the harmonic content of a piece:
//! - 264-entry chord template catalog (22 qualities x 12 roots)
//! - Block-averaged template matching over the chromagram
//! - Transition frequency counting over the recognized sequence

pub mod progressions;
pub mod recognizer;
pub mod templates;

pub use progressions::{count_transitions, ChordTransition};
pub use recognizer::recognize_chords;
pub use templates::{ChordTemplate, ChordTemplates, CHORD_QUALITIES};

use serde::{Deserialize, Serialize};

/// Sentinel label for blocks with no pitched content
pub const NO_CHORD: &str = "N";

/// One recognized chord over a single analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordFrame {
    /// Window start time in seconds
    pub time: f32,

    /// Chord label from the catalog, or "N" for silence
    pub label: String,

    /// Template match score; exactly 0.0 for "N" frames
    pub confidence: f32,
}
