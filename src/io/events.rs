//! Note-event data model
//!
//! One analysis run consumes a single [`Piece`]: the full note-event list
//! plus tempo and time-signature events, as produced by a decoder. All of
//! it is immutable once built; the analyzers are read-only consumers.

use serde::{Deserialize, Serialize};

/// A single played note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// MIDI pitch (0-127)
    pub pitch: u8,

    /// Onset time in seconds
    pub start: f32,

    /// Release time in seconds (>= start)
    pub end: f32,

    /// Velocity (0-127)
    pub velocity: u8,

    /// Program number of the instrument that played the note
    pub instrument: u32,

    /// True for notes on a percussion channel
    pub is_percussion: bool,
}

impl NoteEvent {
    /// Note duration in seconds
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }

    /// Pitch class (pitch modulo 12, 0 = C)
    pub fn pitch_class(&self) -> usize {
        (self.pitch % 12) as usize
    }
}

/// A tempo change at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempoChangeEvent {
    /// Time of the change in seconds
    pub time: f32,

    /// Tempo in beats per minute (> 0)
    pub bpm: f32,
}

/// A time-signature change at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSignatureEvent {
    /// Time of the change in seconds
    pub time: f32,

    /// Beats per bar
    pub numerator: u32,

    /// Beat unit (4 = quarter note)
    pub denominator: u32,
}

/// An instrument present in the piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Program number
    pub program: u32,

    /// Track name from the source file, may be empty
    pub name: String,

    /// True for percussion tracks
    pub is_percussion: bool,
}

impl Instrument {
    /// Display name, falling back to the program number for unnamed tracks
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Instrument {}", self.program)
        } else {
            self.name.clone()
        }
    }
}

/// A fully decoded piece: the frozen input snapshot for one analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Piece {
    /// All note events, across all instruments
    pub notes: Vec<NoteEvent>,

    /// Tempo changes, time-ascending; empty implies the configured default
    pub tempo_changes: Vec<TempoChangeEvent>,

    /// Time-signature changes, time-ascending
    pub time_signatures: Vec<TimeSignatureEvent>,

    /// Instruments present in the piece
    pub instruments: Vec<Instrument>,
}

impl Piece {
    /// Total piece duration in seconds
    ///
    /// The latest note release or meta event time; 0.0 for an empty piece.
    pub fn end_time(&self) -> f32 {
        let mut end = 0.0f32;
        for note in &self.notes {
            end = end.max(note.end);
        }
        for tempo in &self.tempo_changes {
            end = end.max(tempo.time);
        }
        for ts in &self.time_signatures {
            end = end.max(ts.time);
        }
        end
    }

    /// Total note count, percussion included
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }
}
