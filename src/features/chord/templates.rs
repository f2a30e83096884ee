//! Chord templates
//!
//! Fixed catalog of 264 chord templates: 22 quality patterns voiced at
//! each of the 12 roots. Catalog order is root-major (root 0-11 outer,
//! quality insertion order inner) and doubles as the tie-break order in
//! the recognizer, so both orders are part of the contract.

use crate::features::key::PITCH_NAMES;

/// Chord quality patterns in catalog order: (suffix, intervals in semitones)
///
/// Intervals above an octave fold into their pitch class (14 -> 2, 17 -> 5).
pub const CHORD_QUALITIES: [(&str, &[u8]); 22] = [
    // Triads
    ("", &[0, 4, 7]),         // major
    ("m", &[0, 3, 7]),        // minor
    ("dim", &[0, 3, 6]),      // diminished
    ("aug", &[0, 4, 8]),      // augmented
    ("sus2", &[0, 2, 7]),     // suspended 2nd
    ("sus4", &[0, 5, 7]),     // suspended 4th
    // 7ths
    ("maj7", &[0, 4, 7, 11]),  // major 7th
    ("7", &[0, 4, 7, 10]),     // dominant 7th
    ("m7", &[0, 3, 7, 10]),    // minor 7th
    ("m7b5", &[0, 3, 6, 10]),  // half-diminished 7th
    ("dim7", &[0, 3, 6, 9]),   // diminished 7th
    ("mmaj7", &[0, 3, 7, 11]), // minor-major 7th
    ("maj7#5", &[0, 4, 8, 11]), // major 7th #5
    ("7#5", &[0, 4, 8, 10]),   // dominant 7th #5
    ("7b5", &[0, 4, 6, 10]),   // dominant 7th b5
    // 9ths
    ("maj9", &[0, 4, 7, 11, 14]), // major 9th
    ("9", &[0, 4, 7, 10, 14]),    // dominant 9th
    ("m9", &[0, 3, 7, 10, 14]),   // minor 9th
    // Extended
    ("add9", &[0, 4, 7, 14]),  // add 9th
    ("add11", &[0, 4, 7, 17]), // add 11th
    ("6", &[0, 4, 7, 9]),      // major 6th
    ("m6", &[0, 3, 7, 9]),     // minor 6th
];

/// One chord template: a labeled binary pitch-class vector
#[derive(Debug, Clone)]
pub struct ChordTemplate {
    /// Chord label: root name plus quality suffix (e.g. "C", "Am7", "F#dim")
    pub label: String,

    /// Binary indicator vector (1.0 where the pitch class is in the chord)
    pub vector: [f32; 12],
}

/// The fixed 264-entry chord template catalog
#[derive(Debug, Clone)]
pub struct ChordTemplates {
    templates: Vec<ChordTemplate>,
}

impl ChordTemplates {
    /// Build the catalog: roots 0-11 outer, qualities in listed order inner
    pub fn new() -> Self {
        let mut templates = Vec::with_capacity(12 * CHORD_QUALITIES.len());
        for root in 0..12usize {
            for &(suffix, intervals) in &CHORD_QUALITIES {
                let mut vector = [0.0f32; 12];
                for &interval in intervals {
                    vector[(root + interval as usize) % 12] = 1.0;
                }
                templates.push(ChordTemplate {
                    label: format!("{}{}", PITCH_NAMES[root], suffix),
                    vector,
                });
            }
        }
        Self { templates }
    }

    /// Templates in catalog (tie-break) order
    pub fn iter(&self) -> std::slice::Iter<'_, ChordTemplate> {
        self.templates.iter()
    }

    /// Number of templates (always 264)
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when the catalog is empty (never, in practice)
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// True when `label` names a catalog entry
    pub fn contains_label(&self, label: &str) -> bool {
        self.templates.iter().any(|t| t.label == label)
    }
}

impl Default for ChordTemplates {
    fn default() -> Self {
        Self::new()
    }
}
