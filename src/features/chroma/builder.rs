//! Chromagram builder
//!
//! A chromagram is a 12 x T matrix: one row per pitch class, one column
//! per frame at the piano-roll rate. Each pitch row of the roll is summed
//! into its `pitch % 12` chroma row, so a column holds how many octaves of
//! each pitch class sound in that frame.

use serde::{Deserialize, Serialize};

use crate::features::piano_roll::PianoRoll;

/// Time-framed 12-row pitch-class activity matrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chromagram {
    /// 12 rows of `num_frames` summed activity values
    pub rows: Vec<Vec<f32>>,

    /// Start time of each frame in seconds
    pub times: Vec<f32>,

    /// Frame rate in Hz
    pub fs: f32,
}

impl Chromagram {
    /// Number of frames (columns)
    pub fn num_frames(&self) -> usize {
        self.times.len()
    }
}

/// Fold a piano roll into a chromagram
///
/// Frame rate and times carry over from the roll; window and hop choices
/// therefore happen where the roll is built. Coarse frames are deliberate:
/// they trade harmonic resolution for robustness against short ornamental
/// notes.
pub fn build_chromagram(roll: &PianoRoll) -> Chromagram {
    let num_frames = roll.num_frames();
    let mut rows = vec![vec![0.0f32; num_frames]; 12];

    for (pitch, pitch_row) in roll.rows().iter().enumerate() {
        let chroma_row = &mut rows[pitch % 12];
        for (acc, &value) in chroma_row.iter_mut().zip(pitch_row.iter()) {
            *acc += value;
        }
    }

    log::debug!("Built chromagram: 12 x {} frames at {} Hz", num_frames, roll.frame_rate());

    Chromagram {
        rows,
        times: roll.times().to_vec(),
        fs: roll.frame_rate(),
    }
}
