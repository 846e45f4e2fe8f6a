use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of tracked terms; the view settings uniform and the egui filter
/// panel are sized for exactly this many.
pub const TRACKED_TERM_COUNT: usize = 3;

const DEFAULT_SOURCE: &str = "https://www.gutenberg.org/files/158/158-0.txt";

/// A word whose occurrences drive the visualization, bound to the color of
/// its markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedTerm {
    pub word: String,
    pub color: [f32; 3],
}

impl TrackedTerm {
    pub fn new(word: &str, color: [f32; 3]) -> Self {
        Self {
            word: word.to_string(),
            color,
        }
    }
}

/// Startup configuration: document source, tracked terms, jitter seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizerConfig {
    pub source: String,
    pub terms: Vec<TrackedTerm>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            terms: vec![
                TrackedTerm::new("emma", [1.0, 0.75, 0.8]),      // pink
                TrackedTerm::new("knightley", [0.0, 1.0, 1.0]),  // aqua
                TrackedTerm::new("churchill", [0.5, 0.0, 0.5]),  // purple
            ],
            seed: None,
        }
    }
}

impl VisualizerConfig {
    /// Loads a config from a JSON file and validates the term count.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.terms.len() == TRACKED_TERM_COUNT,
            "expected exactly {} tracked terms, got {}",
            TRACKED_TERM_COUNT,
            self.terms.len()
        );
        ensure!(
            self.terms.iter().all(|t| !t.word.is_empty()),
            "tracked terms must not be empty"
        );
        Ok(())
    }

    /// Replaces the tracked words, keeping the configured colors.
    pub fn with_words(mut self, words: &[String]) -> Result<Self> {
        ensure!(
            words.len() == TRACKED_TERM_COUNT,
            "expected exactly {} terms on the command line, got {}",
            TRACKED_TERM_COUNT,
            words.len()
        );
        for (term, word) in self.terms.iter_mut().zip(words) {
            term.word = word.to_lowercase();
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_tracks_three_terms() {
        let config = VisualizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.terms.len(), TRACKED_TERM_COUNT);
        assert_eq!(config.terms[0].word, "emma");
        assert_eq!(config.terms[1].word, "knightley");
        assert_eq!(config.terms[2].word, "churchill");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = VisualizerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: VisualizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.terms[2].word, "churchill");
        assert_eq!(parsed.source, config.source);
    }

    #[test]
    fn wrong_term_count_is_rejected() {
        let mut config = VisualizerConfig::default();
        config.terms.pop();
        assert!(config.validate().is_err());
    }

    #[test]
    fn with_words_lowercases_and_keeps_colors() {
        let config = VisualizerConfig::default();
        let colors: Vec<[f32; 3]> = config.terms.iter().map(|t| t.color).collect();
        let words = vec!["Harriet".to_string(), "Weston".to_string(), "Bates".to_string()];

        let config = config.with_words(&words).unwrap();
        assert_eq!(config.terms[0].word, "harriet");
        for (term, color) in config.terms.iter().zip(colors) {
            assert_eq!(term.color, color);
        }
    }

    #[test]
    fn with_words_rejects_wrong_count() {
        let config = VisualizerConfig::default();
        assert!(config.with_words(&["one".to_string()]).is_err());
    }
}
