//! Sentiment and Emotion Classification
//!
//! Two leaf components sit on top of lexicon engines:
//! - `SentimentClassifier` maps a compound polarity score to a three-way label
//! - `EmotionDetector` extracts emotion categories with a nonzero raw score
//!
//! The engines are traits so alternative lexicons (or test doubles) can be swapped in.

pub mod emotion_lexicon;
pub mod sentiment_analyzer;

pub use emotion_lexicon::EmotionLexicon;
pub use sentiment_analyzer::SentimentAnalyzer;

use crate::config::LexiconConfig;
use crate::error::{AnalyzerError, Result};
use crate::types::{Emotion, SentimentLabel};
use std::fs::File;

/// Compound score at or above which text is positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound score at or below which text is negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Source of a compound polarity score in [-1.0, 1.0]
#[cfg_attr(test, mockall::automock)]
pub trait PolarityEngine: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

/// Source of raw per-category emotion counts, in the engine's native order
#[cfg_attr(test, mockall::automock)]
pub trait EmotionEngine: Send + Sync {
    fn raw_scores(&self, text: &str) -> Vec<(Emotion, u32)>;
}

/// Three-way sentiment classifier
#[derive(Debug, Clone)]
pub struct SentimentClassifier<P = SentimentAnalyzer> {
    engine: P,
}

impl SentimentClassifier<SentimentAnalyzer> {
    pub fn new() -> Self {
        Self::with_engine(SentimentAnalyzer::new())
    }
}

impl Default for SentimentClassifier<SentimentAnalyzer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PolarityEngine> SentimentClassifier<P> {
    pub fn with_engine(engine: P) -> Self {
        Self { engine }
    }

    /// Classify text as positive, negative or neutral
    pub fn classify(&self, text: &str) -> SentimentLabel {
        Self::label_for(self.engine.compound(text))
    }

    /// Map a compound score to its label
    pub fn label_for(compound: f64) -> SentimentLabel {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Emotion tag detector
#[derive(Debug, Clone)]
pub struct EmotionDetector<E = EmotionLexicon> {
    engine: E,
}

impl EmotionDetector<EmotionLexicon> {
    pub fn new() -> Self {
        Self::with_engine(EmotionLexicon::new())
    }
}

impl Default for EmotionDetector<EmotionLexicon> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EmotionEngine> EmotionDetector<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Emotions with a strictly positive raw score, in engine order
    pub fn detect_emotions(&self, text: &str) -> Vec<Emotion> {
        self.engine
            .raw_scores(text)
            .into_iter()
            .filter(|(_, score)| *score > 0)
            .map(|(emotion, _)| emotion)
            .collect()
    }
}

/// Build the bundled engines, swapping in lexicon files when configured
pub fn load_engines(config: &LexiconConfig) -> Result<(SentimentAnalyzer, EmotionLexicon)> {
    let polarity = match &config.polarity_path {
        Some(path) => {
            let path = shellexpand::tilde(path).into_owned();
            tracing::info!(path = %path, "Loading polarity lexicon");
            let file = File::open(&path)
                .map_err(|e| AnalyzerError::Lexicon(format!("{}: {}", path, e)))?;
            SentimentAnalyzer::new().with_vader_lexicon(file)?
        }
        None => SentimentAnalyzer::new(),
    };

    let emotions = match &config.emotion_path {
        Some(path) => {
            let path = shellexpand::tilde(path).into_owned();
            tracing::info!(path = %path, "Loading emotion lexicon");
            let file = File::open(&path)
                .map_err(|e| AnalyzerError::Lexicon(format!("{}: {}", path, e)))?;
            EmotionLexicon::from_nrc_reader(file)?
        }
        None => EmotionLexicon::new(),
    };

    Ok((polarity, emotions))
}
