//! Piano-roll activity matrix
//!
//! Samples the note-event stream onto a fixed time grid: 128 pitch rows,
//! one column per frame at the configured rate. Activity is binary — a
//! pitch is either sounding in a frame or it is not — so downstream
//! consumers see note presence, not velocity. The chromagram folds these
//! rows by pitch class; the rhythm analyzer counts them per column.

use crate::io::events::NoteEvent;

/// Number of pitch rows (MIDI pitch range)
pub const NUM_PITCHES: usize = 128;

/// Binary per-pitch activity matrix at a fixed frame rate
#[derive(Debug, Clone)]
pub struct PianoRoll {
    /// 128 rows of `num_frames` activity values (0.0 or 1.0)
    rows: Vec<Vec<f32>>,

    /// Start time of each frame in seconds
    times: Vec<f32>,

    /// Frame rate in Hz
    fs: f32,
}

impl PianoRoll {
    /// Sample `notes` onto a frame grid covering `[0, end_time)` at `fs` Hz
    ///
    /// A note occupies the frames `[floor(start * fs), floor(end * fs))`,
    /// clamped to the grid. Overlapping notes on the same pitch do not
    /// stack; the row stays at 1.0. Percussion notes carry no pitch and
    /// leave no activity. An empty piece yields zero frames.
    pub fn from_notes(notes: &[NoteEvent], end_time: f32, fs: f32) -> Self {
        let num_frames = if end_time > 0.0 && fs > 0.0 {
            (end_time * fs) as usize
        } else {
            0
        };

        log::debug!(
            "Building piano roll: {} notes, {} frames at {} Hz",
            notes.len(),
            num_frames,
            fs
        );

        let mut rows = vec![vec![0.0f32; num_frames]; NUM_PITCHES];
        for note in notes {
            if note.is_percussion {
                continue;
            }
            let start_frame = (note.start * fs) as usize;
            let end_frame = ((note.end * fs) as usize).min(num_frames);
            let row = &mut rows[note.pitch as usize];
            for frame in row.iter_mut().take(end_frame).skip(start_frame) {
                *frame = 1.0;
            }
        }

        let times = (0..num_frames).map(|i| i as f32 / fs).collect();

        Self { rows, times, fs }
    }

    /// Number of frames in the grid
    pub fn num_frames(&self) -> usize {
        self.times.len()
    }

    /// Frame start times in seconds
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    /// Frame rate in Hz
    pub fn frame_rate(&self) -> f32 {
        self.fs
    }

    /// The 128 activity rows
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    /// Count of distinct active pitches per frame
    pub fn active_pitch_counts(&self) -> Vec<f32> {
        let mut counts = vec![0.0f32; self.num_frames()];
        for row in &self.rows {
            for (count, &value) in counts.iter_mut().zip(row.iter()) {
                if value > 0.0 {
                    *count += 1.0;
                }
            }
        }
        counts
    }
}
