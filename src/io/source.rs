//! Note source seam
//!
//! Decoding a music file into note events is the collaborator's job. The
//! engine only fixes the contract: a source either yields a complete
//! [`Piece`] or fails with [`LoadError`], and a load failure is the one
//! fatal error in the pipeline — every later stage degrades instead.

use std::fmt;
use std::path::Path;

use super::events::Piece;

/// Failure to produce a piece from an input file
#[derive(Debug, Clone)]
pub struct LoadError {
    /// Path that was being loaded
    pub path: String,

    /// Underlying cause, as reported by the decoder
    pub cause: String,
}

impl LoadError {
    /// Build a load error for `path` with the decoder's cause message
    pub fn new(path: &Path, cause: impl Into<String>) -> Self {
        Self {
            path: path.display().to_string(),
            cause: cause.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load {}: {}", self.path, self.cause)
    }
}

impl std::error::Error for LoadError {}

/// A provider of decoded pieces
///
/// Implemented outside this crate by whatever owns the file format (a MIDI
/// decoder, a database, a test fixture).
pub trait NoteSource {
    /// Decode the file at `path` into a piece
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the file is absent, unreadable, or not a
    /// valid music-sequence encoding.
    fn load(&self, path: &Path) -> Result<Piece, LoadError>;
}
