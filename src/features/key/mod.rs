//! Key detection modules
//!
//! Detect the musical key of a piece:
//! - 24-entry scale template catalog (12 major + 12 natural minor)
//! - Pearson-correlation template matching over the pitch-class profile

pub mod detector;
pub mod templates;

pub use detector::detect_key;
pub use templates::{KeyTemplate, KeyTemplates, PITCH_NAMES};

use serde::{Deserialize, Serialize};

/// Key detection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyDetectionResult {
    /// Detected key name, minor keys suffixed with "m"
    pub name: String,

    /// Winning Pearson correlation in [-1, 1]
    ///
    /// Near-zero or negative values mean the guess is unreliable; the
    /// value is surfaced unchanged rather than clamped or hidden.
    pub confidence: f32,
}
