//! Polarity Engine
//!
//! VADER-style lexicon scoring for general-purpose text.
//! Handles emojis, boosters, negations, contrastive "but" and exclamation emphasis.

use super::PolarityEngine;
use crate::error::{AnalyzerError, Result};
use std::collections::HashMap;
use std::io::Read;

/// Normalization constant for the compound score
const ALPHA: f64 = 15.0;

/// Added per exclamation mark, in the direction of the raw sum
const EXCLAMATION_BOOST: f64 = 0.073;

/// VADER lexicon files use a -4..4 valence scale
const VADER_SCALE: f64 = 4.0;

/// VADER-style polarity engine over word, emoji and modifier tables
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    /// Valence per lowercased token, in [-1, 1]. File lexicons may add emoticons like `:)`
    lexicon: HashMap<String, f64>,
    emoji_lexicon: HashMap<char, f64>,
    /// Multipliers applied to the next valenced word
    boosters: HashMap<String, f64>,
    negations: Vec<String>,
}

impl SentimentAnalyzer {
    /// Analyzer with the bundled tables
    pub fn new() -> Self {
        let mut analyzer = Self::empty();
        analyzer.init_lexicons();
        analyzer
    }

    fn empty() -> Self {
        Self {
            lexicon: HashMap::new(),
            emoji_lexicon: HashMap::new(),
            boosters: HashMap::new(),
            negations: Vec::new(),
        }
    }

    /// Replace the word lexicon with a VADER-format file
    /// (`token<TAB>mean<TAB>std<TAB>raw`). Boosters, negations and emojis are kept.
    pub fn with_vader_lexicon<R: Read>(mut self, reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut lexicon = HashMap::new();
        for (line, record) in rdr.records().enumerate() {
            let record = record.map_err(|e| AnalyzerError::Lexicon(e.to_string()))?;
            let (Some(token), Some(mean)) = (record.get(0), record.get(1)) else {
                return Err(AnalyzerError::Lexicon(format!(
                    "line {}: expected token and mean valence",
                    line + 1
                )));
            };
            let valence: f64 = mean.trim().parse().map_err(|_| {
                AnalyzerError::Lexicon(format!("line {}: invalid valence {:?}", line + 1, mean))
            })?;
            lexicon.insert(token.trim().to_lowercase(), (valence / VADER_SCALE).clamp(-1.0, 1.0));
        }

        tracing::debug!(entries = lexicon.len(), "Loaded polarity lexicon");
        self.lexicon = lexicon;
        Ok(self)
    }

    /// Fill the bundled tables
    fn init_lexicons(&mut self) {
        // Positive
        let positive_words = [
            ("good", 0.5),
            ("great", 0.7),
            ("excellent", 0.8),
            ("amazing", 0.8),
            ("awesome", 0.7),
            ("fantastic", 0.8),
            ("wonderful", 0.7),
            ("best", 0.8),
            ("better", 0.4),
            ("love", 0.6),
            ("loved", 0.6),
            ("loves", 0.6),
            ("lovely", 0.6),
            ("like", 0.3),
            ("liked", 0.3),
            ("enjoy", 0.5),
            ("enjoyed", 0.5),
            ("happy", 0.6),
            ("glad", 0.5),
            ("joy", 0.7),
            ("delighted", 0.7),
            ("pleased", 0.5),
            ("satisfied", 0.5),
            ("beautiful", 0.6),
            ("nice", 0.4),
            ("perfect", 0.8),
            ("brilliant", 0.7),
            ("recommend", 0.5),
            ("recommended", 0.5),
            ("helpful", 0.5),
            ("friendly", 0.5),
            ("comfortable", 0.4),
            ("fun", 0.5),
            ("thanks", 0.4),
            ("thank", 0.4),
            ("grateful", 0.6),
            ("hope", 0.4),
            ("hopeful", 0.5),
            ("excited", 0.6),
            ("exciting", 0.6),
            ("trust", 0.4),
            ("safe", 0.4),
            ("calm", 0.3),
            ("strong", 0.5),
            ("win", 0.6),
            ("winning", 0.6),
            ("success", 0.7),
            ("successful", 0.7),
            ("positive", 0.5),
            ("easy", 0.4),
            ("fast", 0.3),
            ("worth", 0.4),
        ];

        // Negative
        let negative_words = [
            ("bad", -0.5),
            ("terrible", -0.8),
            ("awful", -0.7),
            ("horrible", -0.8),
            ("poor", -0.5),
            ("worst", -0.8),
            ("worse", -0.5),
            ("hate", -0.7),
            ("hated", -0.7),
            ("hates", -0.7),
            ("dislike", -0.4),
            ("sad", -0.5),
            ("unhappy", -0.5),
            ("miserable", -0.7),
            ("ugly", -0.5),
            ("weak", -0.5),
            ("angry", -0.6),
            ("furious", -0.7),
            ("mad", -0.5),
            ("annoyed", -0.4),
            ("annoying", -0.5),
            ("frustrated", -0.5),
            ("frustrating", -0.5),
            ("disappointed", -0.6),
            ("disappointing", -0.6),
            ("disgusting", -0.7),
            ("gross", -0.5),
            ("afraid", -0.5),
            ("scared", -0.5),
            ("terrified", -0.7),
            ("terrifying", -0.7),
            ("fear", -0.5),
            ("panic", -0.6),
            ("worried", -0.4),
            ("anxious", -0.4),
            ("broken", -0.5),
            ("useless", -0.6),
            ("waste", -0.5),
            ("boring", -0.4),
            ("slow", -0.3),
            ("rude", -0.5),
            ("lose", -0.6),
            ("losing", -0.6),
            ("loss", -0.6),
            ("fail", -0.6),
            ("failed", -0.6),
            ("failure", -0.7),
            ("negative", -0.5),
            ("problem", -0.4),
            ("problems", -0.4),
            ("danger", -0.5),
            ("dangerous", -0.6),
            ("crash", -0.7),
            ("cry", -0.4),
            ("pain", -0.5),
            ("painful", -0.6),
            ("sick", -0.5),
            ("scam", -0.9),
            ("fraud", -0.9),
            ("refund", -0.2),
        ];

        for (word, score) in positive_words.iter().chain(negative_words.iter()) {
            self.lexicon.insert(word.to_string(), *score);
        }

        // Emoji
        let emojis = [
            ('😀', 0.6),
            ('😃', 0.6),
            ('😊', 0.6),
            ('😍', 0.8),
            ('🥰', 0.8),
            ('😂', 0.5),
            ('👍', 0.4),
            ('❤', 0.5),
            ('🎉', 0.6),
            ('🔥', 0.4),
            ('✅', 0.4),
            ('😢', -0.5),
            ('😭', -0.6),
            ('😡', -0.7),
            ('😠', -0.6),
            ('😱', -0.5),
            ('😰', -0.4),
            ('🤢', -0.6),
            ('👎', -0.4),
            ('❌', -0.4),
            ('💔', -0.6),
        ];

        for (emoji, score) in emojis {
            self.emoji_lexicon.insert(emoji, score);
        }

        // Boosters
        let boosters = [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.5),
            ("absolutely", 1.4),
            ("completely", 1.4),
            ("totally", 1.3),
            ("so", 1.2),
            ("super", 1.3),
            ("incredibly", 1.4),
            ("highly", 1.3),
            ("deeply", 1.3),
            ("utterly", 1.5),
            ("quite", 1.1),
            ("slightly", 0.7),
            ("somewhat", 0.8),
            ("barely", 0.6),
        ];

        for (word, factor) in boosters {
            self.boosters.insert(word.to_string(), factor);
        }

        // Negators
        self.negations = [
            "not", "no", "never", "none", "neither", "nobody", "nothing", "nowhere", "isn't",
            "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't", "doesn't", "don't",
            "didn't", "won't", "wouldn't", "can't", "cannot", "couldn't", "shouldn't",
        ]
        .iter()
        .map(|w| w.to_string())
        .collect();
    }

    /// Compound polarity of a text in (-1, 1): per-token valence, modifiers,
    /// then the `but` and emphasis rules
    pub fn analyze(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        let cleaned: Vec<String> = words.iter().map(|w| self.clean_word(w)).collect();

        let mut scores: Vec<f64> = Vec::new();

        // Emojis are matched on the raw text, before lowercasing and cleaning
        for c in text.chars() {
            if let Some(&score) = self.emoji_lexicon.get(&c) {
                scores.push(score);
            }
        }

        // Scores before a contrastive "but" are dampened, those after it amplified
        let but_index = cleaned.iter().position(|w| w == "but");

        for (i, word) in cleaned.iter().enumerate() {
            // Raw token first so punctuation-only entries (emoticons) can match
            let valence = self
                .lexicon
                .get(words[i])
                .or_else(|| self.lexicon.get(word.as_str()));
            if let Some(&score) = valence {
                let mut modified = self.apply_modifiers(&cleaned, i, score);
                match but_index {
                    Some(b) if i < b => modified *= 0.5,
                    Some(b) if i > b => modified *= 1.5,
                    _ => {}
                }
                scores.push(modified);
            }
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mut sum: f64 = scores.iter().sum();
        sum += self.exclamation_emphasis(text, sum);
        self.normalize(sum)
    }

    /// Strip punctuation, keeping apostrophes and hyphens
    fn clean_word(&self, word: &str) -> String {
        word.chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '-')
            .collect::<String>()
            .to_lowercase()
    }

    /// Boosters and negators within the three preceding tokens
    fn apply_modifiers(&self, words: &[String], index: usize, mut score: f64) -> f64 {
        let start = index.saturating_sub(3);

        for prev_word in &words[start..index] {
            if let Some(&factor) = self.boosters.get(prev_word) {
                score *= factor;
            }

            if self.negations.contains(prev_word) {
                score *= -0.5; // Flip and dampen
            }
        }

        score.clamp(-1.0, 1.0)
    }

    /// Emphasis from up to four exclamation marks
    fn exclamation_emphasis(&self, text: &str, sum: f64) -> f64 {
        let marks = text.chars().filter(|&c| c == '!').count().min(4) as f64;
        if sum > 0.0 {
            marks * EXCLAMATION_BOOST
        } else if sum < 0.0 {
            -marks * EXCLAMATION_BOOST
        } else {
            0.0
        }
    }

    /// Map an unbounded sum into (-1, 1)
    fn normalize(&self, score: f64) -> f64 {
        score / (score * score + ALPHA).sqrt()
    }

}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityEngine for SentimentAnalyzer {
    fn compound(&self, text: &str) -> f64 {
        self.analyze(text)
    }
}
