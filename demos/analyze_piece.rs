//! Example: analyze a short piece and print the results
//!
//! Builds a few bars of a C major progression in code (file decoding is a
//! collaborator's job) and prints the merged analysis, plus the full
//! record as JSON.

use cantus::io::{Instrument, NoteEvent, Piece, TempoChangeEvent};
use cantus::{analyze, AnalysisConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let mut notes = Vec::new();
    let triads: [[u8; 3]; 4] = [[60, 64, 67], [53, 57, 60], [55, 59, 62], [60, 64, 67]];
    for (bar, triad) in triads.iter().enumerate() {
        let start = bar as f32 * 2.0;
        for &pitch in triad {
            notes.push(NoteEvent {
                pitch,
                start,
                end: start + 2.0,
                velocity: 90,
                instrument: 0,
                is_percussion: false,
            });
        }
    }

    let piece = Piece {
        notes,
        tempo_changes: vec![TempoChangeEvent {
            time: 0.0,
            bpm: 96.0,
        }],
        instruments: vec![Instrument {
            program: 0,
            name: "Piano".to_string(),
            is_percussion: false,
        }],
        ..Piece::default()
    };

    let result = analyze(&piece, AnalysisConfig::default())?;

    println!("Analysis Results:");
    println!(
        "  Key: {} (confidence: {:.2})",
        result.key.name, result.key.confidence
    );
    println!("  Scale notes: {}", result.scale_notes.join(" "));
    println!("  Tempo: {:.1} BPM", result.rhythm.avg_tempo);
    println!("  Chords:");
    for frame in &result.harmony.chords {
        println!(
            "    {:>5.1}s  {:<6} ({:.2})",
            frame.time, frame.label, frame.confidence
        );
    }
    println!("  Top progressions:");
    for t in result.harmony.progressions.iter().take(5) {
        println!("    {} -> {} ({}x)", t.from, t.to, t.count);
    }
    println!("  Processing time: {:.2} ms", result.metadata.processing_time_ms);

    println!("\nFull record as JSON:");
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
