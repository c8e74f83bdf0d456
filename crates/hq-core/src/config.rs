//! Configuration for a quiz session.

use crate::loader::ContentSource;

/// Configuration for a quiz session.
#[derive(Debug, Clone, Default)]
pub struct QuizConfig {
    /// RNG seed for reproducible zodiac/ascendant draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Where the content document is loaded from.
    pub source: ContentSource,
}

impl QuizConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the content source.
    pub fn with_source(mut self, source: ContentSource) -> Self {
        self.source = source;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = QuizConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.source, ContentSource::Embedded);
    }

    #[test]
    fn builder_methods() {
        let cfg = QuizConfig::default()
            .with_seed(123)
            .with_source(ContentSource::File("quiz.json".into()));
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.source, ContentSource::File("quiz.json".into()));
    }
}
