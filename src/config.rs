//! Configuration parameters for music analysis

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Harmony framing
    /// Chord analysis window length in seconds (default: 0.5)
    /// Each emitted chord frame averages the chroma over one window.
    pub window_seconds: f32,

    /// Frame hop length in seconds (default: 0.1)
    /// The piano roll, chromagram and density series are sampled at
    /// `fs = round(1 / hop_seconds)` frames per second. Coarse framing
    /// trades harmonic resolution for robustness against ornamental notes.
    pub hop_seconds: f32,

    // Rhythm
    /// Tempo assumed when the piece carries no tempo events (default: 120.0)
    pub default_tempo_bpm: f32,
}

impl AnalysisConfig {
    /// Frame rate in Hz derived from the hop length
    pub fn frame_rate(&self) -> f32 {
        (1.0 / self.hop_seconds).round()
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_seconds: 0.5,
            hop_seconds: 0.1,
            default_tempo_bpm: 120.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_rate() {
        let config = AnalysisConfig::default();
        assert_eq!(config.frame_rate(), 10.0);
    }

    #[test]
    fn test_custom_hop_frame_rate() {
        let config = AnalysisConfig {
            hop_seconds: 0.05,
            ..AnalysisConfig::default()
        };
        assert_eq!(config.frame_rate(), 20.0);
    }
}
