//! Chord recognition
//!
//! Slides a non-overlapping window across the chromagram, averages each
//! block to a single 12-vector, and matches it against the 264-entry
//! template catalog by dot product. One chord frame comes out per block.
//! Brute force by design: frames/win x 264 x 12 multiplies per piece is
//! fine for batch analysis of a single file.

use super::templates::ChordTemplates;
use super::{ChordFrame, NO_CHORD};
use crate::features::chroma::Chromagram;

/// Chroma energy below which a block is considered silent
const SILENCE_EPSILON: f32 = 1e-6;

/// Recognize chords over a chromagram
///
/// The window is `max(1, round(window_seconds * fs))` frames and the scan
/// steps by the full window (block average, not a sliding correlation).
/// Silent blocks (energy sum below 1e-6) emit the "N" sentinel with
/// confidence exactly 0; other blocks emit the catalog label with the
/// strictly-greatest template dot product, ties resolving to the earlier
/// catalog entry. Each frame is stamped with its block's start time,
/// clipped to the last valid frame time.
pub fn recognize_chords(
    chroma: &Chromagram,
    window_seconds: f32,
    templates: &ChordTemplates,
) -> Vec<ChordFrame> {
    let num_frames = chroma.num_frames();
    let win_frames = ((window_seconds * chroma.fs).round() as usize).max(1);

    log::debug!(
        "Recognizing chords: {} frames, window {} frames, {} templates",
        num_frames,
        win_frames,
        templates.len()
    );

    let mut frames = Vec::new();
    let mut start = 0usize;
    while start < num_frames {
        let end = (start + win_frames).min(num_frames);
        let time = chroma.times[start.min(num_frames - 1)];

        let block = average_block(chroma, start, end);
        let energy: f32 = block.iter().sum();
        if energy < SILENCE_EPSILON {
            frames.push(ChordFrame {
                time,
                label: NO_CHORD.to_string(),
                confidence: 0.0,
            });
            start += win_frames;
            continue;
        }

        let mut best_label = NO_CHORD;
        let mut best_score = -1.0f32;
        for template in templates.iter() {
            let score: f32 = template
                .vector
                .iter()
                .zip(block.iter())
                .map(|(t, c)| t * c)
                .sum();
            if score > best_score {
                best_score = score;
                best_label = &template.label;
            }
        }

        frames.push(ChordFrame {
            time,
            label: best_label.to_string(),
            confidence: best_score,
        });
        start += win_frames;
    }

    frames
}

/// Average the chroma columns of `[start, end)` into one 12-vector
fn average_block(chroma: &Chromagram, start: usize, end: usize) -> [f32; 12] {
    let mut block = [0.0f32; 12];
    let len = (end - start) as f32;
    for (acc, row) in block.iter_mut().zip(chroma.rows.iter()) {
        *acc = row[start..end].iter().sum::<f32>() / len;
    }
    block
}
