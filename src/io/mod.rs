//! Input-side types and the note source seam
//!
//! The engine does not decode music files itself. A [`source::NoteSource`]
//! collaborator (a MIDI decoder, a test fixture, ...) hands it one frozen
//! [`events::Piece`]; everything downstream reads that snapshot.

pub mod events;
pub mod source;

pub use events::{Instrument, NoteEvent, Piece, TempoChangeEvent, TimeSignatureEvent};
pub use source::{LoadError, NoteSource};
