//! Rhythm analysis modules
//!
//! Derive tempo and pulse from the note stream:
//! - Average tempo over the tempo-change events
//! - Active-note density series at the frame rate
//! - Beat detection by peak picking on the density series

pub mod analyzer;
pub mod peak_picking;

pub use analyzer::{analyze_rhythm, RhythmAnalysis};
pub use peak_picking::find_peaks;
