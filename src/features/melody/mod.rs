//! Melody analysis modules
//!
//! Extract melodic shape from the non-percussion notes:
//! - Signed interval sequence between consecutive onsets
//! - Up/down/same contour sequence
//! - Pitch range and mean velocity

pub mod analyzer;

pub use analyzer::{analyze_melody, ContourStep, MelodyAnalysis, MelodyNote};
