//! Error types for the music analysis engine

use std::fmt;

/// Errors that can occur during analysis
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// The note source failed to produce a piece
    LoadError(String),

    /// Processing error during analysis
    ProcessingError(String),

    /// Numerical error (degenerate correlation, empty series, etc.)
    NumericalError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::LoadError(msg) => write!(f, "Load error: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            AnalysisError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<crate::io::source::LoadError> for AnalysisError {
    fn from(err: crate::io::source::LoadError) -> Self {
        AnalysisError::LoadError(err.to_string())
    }
}
