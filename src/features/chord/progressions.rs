//! Chord progression counting
//!
//! Aggregates the recognized chord sequence into a frequency table of
//! adjacent label pairs. Pairs touching the "N" sentinel never count.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{ChordFrame, NO_CHORD};

/// One observed chord-to-chord transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordTransition {
    /// Label of the first chord of the pair
    pub from: String,

    /// Label of the second chord of the pair
    pub to: String,

    /// Number of times the pair occurred (>= 1)
    pub count: u32,
}

/// Count chord transitions over the recognized frame sequence
///
/// Scans consecutive frame pairs once; a pair counts only when neither
/// label is "N". The table is keyed by the ordered pair in a hash map, so
/// each update is O(1) amortized. Output is sorted by count descending;
/// ties keep first-encountered order (the sort is stable and entries are
/// inserted in scan order).
pub fn count_transitions(frames: &[ChordFrame]) -> Vec<ChordTransition> {
    let mut transitions: Vec<ChordTransition> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for pair in frames.windows(2) {
        let (from, to) = (&pair[0].label, &pair[1].label);
        if from == NO_CHORD || to == NO_CHORD {
            continue;
        }

        match index.get(&(from.clone(), to.clone())) {
            Some(&i) => transitions[i].count += 1,
            None => {
                index.insert((from.clone(), to.clone()), transitions.len());
                transitions.push(ChordTransition {
                    from: from.clone(),
                    to: to.clone(),
                    count: 1,
                });
            }
        }
    }

    transitions.sort_by(|a, b| b.count.cmp(&a.count));

    log::debug!("Counted {} distinct chord transitions", transitions.len());

    transitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(labels: &[&str]) -> Vec<ChordFrame> {
        labels
            .iter()
            .enumerate()
            .map(|(i, &label)| ChordFrame {
                time: i as f32 * 0.5,
                label: label.to_string(),
                confidence: 1.0,
            })
            .collect()
    }

    #[test]
    fn test_counts_repeated_pair() {
        let transitions = count_transitions(&frames(&["C", "G", "C", "G"]));
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].from, "C");
        assert_eq!(transitions[0].to, "G");
        assert_eq!(transitions[0].count, 2);
        assert_eq!(transitions[1].count, 1);
    }

    #[test]
    fn test_no_chord_pairs_are_skipped() {
        let transitions = count_transitions(&frames(&["C", "N", "G", "Am", "N"]));
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].from, "G");
        assert_eq!(transitions[0].to, "Am");
        for t in &transitions {
            assert_ne!(t.from, "N");
            assert_ne!(t.to, "N");
        }
    }

    #[test]
    fn test_counts_sum_to_qualifying_pairs() {
        let labels = ["C", "F", "N", "F", "G", "G", "C", "N", "N", "Am"];
        let transitions = count_transitions(&frames(&labels));
        let qualifying = labels
            .windows(2)
            .filter(|p| p[0] != "N" && p[1] != "N")
            .count() as u32;
        let total: u32 = transitions.iter().map(|t| t.count).sum();
        assert_eq!(total, qualifying);
    }

    #[test]
    fn test_self_transition_counts() {
        let transitions = count_transitions(&frames(&["C", "C", "C"]));
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].from, "C");
        assert_eq!(transitions[0].to, "C");
        assert_eq!(transitions[0].count, 2);
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let transitions = count_transitions(&frames(&["C", "G", "Am", "F"]));
        assert_eq!(transitions.len(), 3);
        assert_eq!((transitions[0].from.as_str(), transitions[0].to.as_str()), ("C", "G"));
        assert_eq!((transitions[1].from.as_str(), transitions[1].to.as_str()), ("G", "Am"));
        assert_eq!((transitions[2].from.as_str(), transitions[2].to.as_str()), ("Am", "F"));
    }

    #[test]
    fn test_empty_and_singleton_sequences() {
        assert!(count_transitions(&frames(&[])).is_empty());
        assert!(count_transitions(&frames(&["C"])).is_empty());
    }
}
