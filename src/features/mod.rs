//! Feature extraction modules
//!
//! This module contains all analysis algorithms:
//! - Piano-roll activity sampling
//! - Pitch-class profiling
//! - Key detection (24 scale templates)
//! - Chromagram construction
//! - Chord recognition (264 chord templates) and progression counting
//! - Rhythm analysis (tempo, density, beats)
//! - Melody analysis (intervals, contour)

pub mod chord;
pub mod chroma;
pub mod key;
pub mod melody;
pub mod piano_roll;
pub mod profile;
pub mod rhythm;
