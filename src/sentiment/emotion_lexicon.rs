//! Emotion Lexicon Engine
//!
//! Word-level emotion association in the NRC EmoLex style: every lexicon word
//! maps to a fixed set of emotion categories, and a text's raw score for a
//! category is the number of its tokens associated with that category.

use super::EmotionEngine;
use crate::error::{AnalyzerError, Result};
use crate::types::Emotion;
use crate::types::Emotion::{
    Anger, Anticipation, Disgust, Fear, Joy, Negative, Positive, Sadness, Surprise, Trust,
};
use std::collections::HashMap;
use std::io::Read;

/// Bundled word associations
const BUNDLED: &[(&str, &[Emotion])] = &[
    // anger / disgust
    ("abuse", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("angry", &[Anger, Disgust, Negative]),
    ("anger", &[Anger, Negative]),
    ("annoy", &[Anger, Disgust, Negative]),
    ("annoyed", &[Anger, Disgust, Negative]),
    ("annoying", &[Anger, Disgust, Negative]),
    ("awful", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("bad", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("betray", &[Anger, Disgust, Negative, Sadness, Surprise]),
    ("bitter", &[Anger, Disgust, Negative, Sadness]),
    ("cheat", &[Anger, Disgust, Negative]),
    ("complain", &[Anger, Negative, Sadness]),
    ("cruel", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("disgust", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("disgusting", &[Anger, Disgust, Fear, Negative]),
    ("fraud", &[Anger, Negative]),
    ("frustrated", &[Anger, Disgust, Negative, Sadness]),
    ("frustrating", &[Anger, Disgust, Negative, Sadness]),
    ("furious", &[Anger, Disgust, Negative]),
    ("gross", &[Disgust, Negative]),
    ("hate", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("hated", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("hatred", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("horrible", &[Anger, Disgust, Fear, Negative]),
    ("hostile", &[Anger, Disgust, Fear, Negative]),
    ("insult", &[Anger, Disgust, Negative, Sadness, Surprise]),
    ("mad", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("nasty", &[Anger, Disgust, Fear, Negative]),
    ("outrage", &[Anger, Disgust, Negative]),
    ("rage", &[Anger, Negative]),
    ("rude", &[Anger, Disgust, Negative]),
    ("scam", &[Anger, Disgust, Negative]),
    ("sick", &[Disgust, Negative]),
    ("stupid", &[Negative]),
    ("terrible", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("ugly", &[Disgust, Negative]),
    ("useless", &[Negative]),
    ("violent", &[Anger, Fear, Negative]),
    ("waste", &[Disgust, Negative]),
    ("worst", &[Negative]),
    // fear
    ("afraid", &[Fear, Negative]),
    ("alarm", &[Fear, Negative, Surprise]),
    ("anxiety", &[Anger, Anticipation, Fear, Negative, Sadness]),
    ("anxious", &[Anticipation, Fear, Negative]),
    ("crash", &[Fear, Negative, Sadness, Surprise]),
    ("danger", &[Fear, Negative]),
    ("dangerous", &[Fear, Negative]),
    ("dread", &[Anticipation, Fear, Negative]),
    ("fear", &[Anger, Fear, Negative]),
    ("fright", &[Fear, Negative, Surprise]),
    ("horror", &[Anger, Disgust, Fear, Negative, Sadness, Surprise]),
    ("nervous", &[Anticipation, Fear, Negative]),
    ("nightmare", &[Fear, Negative]),
    ("panic", &[Fear, Negative]),
    ("risk", &[Anticipation, Fear, Negative]),
    ("scared", &[Fear, Negative]),
    ("scary", &[Fear, Negative]),
    ("terrified", &[Fear, Negative]),
    ("terrifying", &[Anger, Disgust, Fear, Negative]),
    ("threat", &[Anger, Fear, Negative]),
    ("worried", &[Fear, Negative, Sadness]),
    ("worry", &[Anticipation, Fear, Negative, Sadness]),
    // sadness
    ("alone", &[Negative, Sadness]),
    ("broken", &[Anger, Fear, Negative, Sadness]),
    ("cry", &[Negative, Sadness]),
    ("depressed", &[Anger, Fear, Negative, Sadness]),
    ("disappointed", &[Anger, Disgust, Negative, Sadness]),
    ("disappointing", &[Negative, Sadness]),
    ("fail", &[Disgust, Fear, Negative, Sadness]),
    ("failure", &[Disgust, Fear, Negative, Sadness]),
    ("grief", &[Negative, Sadness]),
    ("hurt", &[Anger, Fear, Negative, Sadness]),
    ("lonely", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("lose", &[Anger, Disgust, Fear, Negative, Sadness, Surprise]),
    ("loss", &[Anger, Fear, Negative, Sadness]),
    ("miserable", &[Anger, Disgust, Negative, Sadness]),
    ("miss", &[Negative, Sadness]),
    ("pain", &[Fear, Negative, Sadness]),
    ("painful", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("poor", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("regret", &[Negative, Sadness]),
    ("sad", &[Negative, Sadness]),
    ("sorry", &[Negative, Sadness]),
    ("tears", &[Sadness]),
    ("unhappy", &[Anger, Disgust, Negative, Sadness]),
    // anticipation / surprise
    ("amazing", &[Joy, Positive, Surprise]),
    ("anticipate", &[Anticipation]),
    ("await", &[Anticipation]),
    ("eager", &[Anticipation, Joy, Positive, Trust]),
    ("expect", &[Anticipation, Positive, Surprise, Trust]),
    ("excited", &[Anticipation, Joy, Positive, Surprise]),
    ("exciting", &[Anticipation, Joy, Positive, Surprise]),
    ("finally", &[Anticipation, Disgust, Joy, Positive, Surprise, Trust]),
    ("hope", &[Anticipation, Joy, Positive, Surprise, Trust]),
    ("hopeful", &[Anticipation, Joy, Positive, Surprise, Trust]),
    ("shock", &[Anger, Fear, Negative, Surprise]),
    ("shocked", &[Anger, Fear, Negative, Surprise]),
    ("soon", &[Anticipation]),
    ("sudden", &[Surprise]),
    ("surprise", &[Fear, Joy, Positive, Surprise]),
    ("surprised", &[Surprise]),
    ("unexpected", &[Anticipation, Fear, Joy, Negative, Positive, Surprise]),
    ("wait", &[Anticipation, Negative]),
    ("wonder", &[Joy, Positive, Surprise]),
    // joy / trust / positive
    ("beautiful", &[Joy, Positive]),
    ("best", &[Joy, Positive, Trust]),
    ("brilliant", &[Anticipation, Joy, Positive, Trust]),
    ("celebrate", &[Anticipation, Joy, Positive]),
    ("cheerful", &[Joy, Positive, Surprise]),
    ("comfort", &[Anticipation, Joy, Positive, Trust]),
    ("delighted", &[Joy, Positive]),
    ("enjoy", &[Anticipation, Joy, Positive, Trust]),
    ("excellent", &[Joy, Positive, Trust]),
    ("fantastic", &[Positive]),
    ("fun", &[Anticipation, Joy, Positive]),
    ("glad", &[Anticipation, Joy, Positive]),
    ("good", &[Anticipation, Joy, Positive, Surprise, Trust]),
    ("grateful", &[Joy, Positive]),
    ("great", &[Joy, Positive]),
    ("happy", &[Anticipation, Joy, Positive, Trust]),
    ("happiness", &[Anticipation, Joy, Positive]),
    ("honest", &[Anger, Disgust, Fear, Joy, Positive, Sadness, Trust]),
    ("joy", &[Joy, Positive, Trust]),
    ("kind", &[Joy, Positive, Trust]),
    ("love", &[Joy, Positive]),
    ("lovely", &[Anticipation, Joy, Positive, Sadness, Surprise, Trust]),
    ("perfect", &[Anticipation, Joy, Positive, Trust]),
    ("pleasant", &[Anticipation, Joy, Positive, Surprise, Trust]),
    ("pleased", &[Joy, Positive]),
    ("proud", &[Anticipation, Joy, Positive, Trust]),
    ("recommend", &[Positive, Trust]),
    ("reliable", &[Positive, Trust]),
    ("safe", &[Joy, Positive, Trust]),
    ("satisfied", &[Joy, Positive]),
    ("smile", &[Joy, Positive, Surprise, Trust]),
    ("success", &[Anticipation, Joy, Positive]),
    ("successful", &[Anticipation, Joy, Positive, Trust]),
    ("sweet", &[Anticipation, Joy, Positive, Surprise, Trust]),
    ("thank", &[Positive]),
    ("thanks", &[Joy, Positive]),
    ("trust", &[Trust]),
    ("useful", &[Positive]),
    ("win", &[Anticipation, Joy, Positive, Surprise, Trust]),
    ("wonderful", &[Joy, Positive, Surprise, Trust]),
    // neutral-leaning words with a single association
    ("doctor", &[Positive, Trust]),
    ("friend", &[Joy, Positive, Trust]),
    ("friendly", &[Anticipation, Joy, Positive, Trust]),
    ("help", &[Positive, Trust]),
    ("helpful", &[Joy, Positive, Trust]),
    ("money", &[Anger, Anticipation, Joy, Positive, Surprise, Trust]),
    ("problem", &[Fear, Negative, Sadness]),
    ("refund", &[Positive]),
    ("mentor", &[Positive, Trust]),
];

/// Emotion lexicon mapping words to their emotion categories
#[derive(Debug, Clone)]
pub struct EmotionLexicon {
    words: HashMap<String, Vec<Emotion>>,
}

impl EmotionLexicon {
    /// Create a lexicon with the bundled word associations
    pub fn new() -> Self {
        let words = BUNDLED
            .iter()
            .map(|(word, emotions)| (word.to_string(), emotions.to_vec()))
            .collect();
        Self { words }
    }

    /// Load an NRC EmoLex word-level file (`word<TAB>emotion<TAB>0|1`)
    pub fn from_nrc_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut words: HashMap<String, Vec<Emotion>> = HashMap::new();
        for (line, record) in rdr.records().enumerate() {
            let record = record.map_err(|e| AnalyzerError::Lexicon(e.to_string()))?;
            if record.len() == 1 && record[0].trim().is_empty() {
                continue;
            }
            if record.len() != 3 {
                return Err(AnalyzerError::Lexicon(format!(
                    "line {}: expected word, emotion and flag",
                    line + 1
                )));
            }

            let emotion: Emotion = record[1]
                .parse()
                .map_err(|e| AnalyzerError::Lexicon(format!("line {}: {}", line + 1, e)))?;
            let associated = match record[2].trim() {
                "1" => true,
                "0" => false,
                other => {
                    return Err(AnalyzerError::Lexicon(format!(
                        "line {}: invalid association flag {:?}",
                        line + 1,
                        other
                    )))
                }
            };

            let entry = words.entry(record[0].trim().to_lowercase()).or_default();
            if associated && !entry.contains(&emotion) {
                entry.push(emotion);
            }
        }

        words.retain(|_, emotions| !emotions.is_empty());
        for emotions in words.values_mut() {
            emotions.sort();
        }

        tracing::debug!(entries = words.len(), "Loaded emotion lexicon");
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Emotions associated with a single token
    pub fn lookup(&self, token: &str) -> Option<&[Emotion]> {
        if let Some(emotions) = self.words.get(token) {
            return Some(emotions);
        }
        // Plural and possessive fallbacks
        let stem = token.strip_suffix("'s").or_else(|| token.strip_suffix('s'))?;
        self.words.get(stem).map(|e| e.as_slice())
    }

    fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|t| t.trim_matches('\'').to_lowercase())
            .filter(|t| !t.is_empty())
    }
}

impl Default for EmotionLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionEngine for EmotionLexicon {
    fn raw_scores(&self, text: &str) -> Vec<(Emotion, u32)> {
        let mut scores: Vec<(Emotion, u32)> = Vec::new();

        for token in Self::tokenize(text) {
            let Some(emotions) = self.lookup(&token) else {
                continue;
            };
            for &emotion in emotions {
                match scores.iter_mut().find(|(e, _)| *e == emotion) {
                    Some((_, count)) => *count += 1,
                    None => scores.push((emotion, 1)),
                }
            }
        }

        scores
    }
}
