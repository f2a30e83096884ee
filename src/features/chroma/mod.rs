//! Chromagram construction
//!
//! Folds the 128-row piano roll into a time-framed 12-row pitch-class
//! activity matrix, the substrate for chord recognition.

pub mod builder;

pub use builder::{build_chromagram, Chromagram};
