//! Batch Analysis
//!
//! Turns a dataset with a designated text column into per-row sentiment and
//! emotion annotations plus the two frequency distributions used for reporting.


use crate::data::Dataset;
use crate::error::{AnalyzerError, Result};
use crate::sentiment::{
    EmotionDetector, EmotionEngine, EmotionLexicon, PolarityEngine, SentimentAnalyzer,
    SentimentClassifier,
};
use crate::types::{Emotion, FrequencyDistribution, SentimentLabel};
use serde::Serialize;

/// Delimiter joining a row's emotions into a single attribute
pub const EMOTION_DELIMITER: &str = ",";

/// Result of analyzing a single text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub sentiment: SentimentLabel,
    pub emotions: Vec<Emotion>,
}

/// A dataset row with its derived attributes
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRow {
    /// Original fields, untouched
    pub fields: Vec<String>,
    pub sentiment: SentimentLabel,
    /// Emotions joined with `EMOTION_DELIMITER`; empty when none were found
    pub emotions: String,
}

impl AnnotatedRow {
    /// Individual emotion tags of this row
    pub fn emotion_tags(&self) -> impl Iterator<Item = &str> {
        self.emotions
            .split(EMOTION_DELIMITER)
            .filter(|tag| !tag.is_empty())
    }
}

/// Output of a batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchAnalysis {
    /// Headers of the analyzed dataset
    pub headers: Vec<String>,
    pub rows: Vec<AnnotatedRow>,
    /// Row count per label, ordered by label name
    pub sentiment: FrequencyDistribution,
    /// Tag count per emotion, ordered by descending count
    pub emotions: FrequencyDistribution,
}

impl BatchAnalysis {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The analyzed dataset with `sentiment` and `emotions` columns appended
    pub fn annotated_dataset(&self) -> Result<Dataset> {
        let mut headers = self.headers.clone();
        headers.push("sentiment".to_string());
        headers.push("emotions".to_string());

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut fields = row.fields.clone();
                fields.push(row.sentiment.to_string());
                fields.push(row.emotions.clone());
                fields
            })
            .collect();

        Dataset::new(headers, rows)
    }
}

/// Combines classifier and detector over single texts and whole datasets
#[derive(Debug, Clone)]
pub struct BatchAggregator<P = SentimentAnalyzer, E = EmotionLexicon> {
    classifier: SentimentClassifier<P>,
    detector: EmotionDetector<E>,
}

impl BatchAggregator<SentimentAnalyzer, EmotionLexicon> {
    /// Aggregator backed by the bundled lexicons
    pub fn new() -> Self {
        Self::with_engines(SentimentAnalyzer::new(), EmotionLexicon::new())
    }
}

impl Default for BatchAggregator<SentimentAnalyzer, EmotionLexicon> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PolarityEngine, E: EmotionEngine> BatchAggregator<P, E> {
    pub fn with_engines(polarity: P, emotions: E) -> Self {
        Self {
            classifier: SentimentClassifier::with_engine(polarity),
            detector: EmotionDetector::with_engine(emotions),
        }
    }

    /// Analyze one user-supplied text. Blank input is rejected.
    pub fn analyze_text(&self, text: &str) -> Result<TextAnalysis> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }

        Ok(TextAnalysis {
            sentiment: self.classifier.classify(text),
            emotions: self.detector.detect_emotions(text),
        })
    }

    /// Annotate every row with its sentiment label and joined emotions.
    ///
    /// A blank text cell fails the whole batch; it is never scored.
    pub fn annotate(&self, dataset: &Dataset, text_field: &str) -> Result<Vec<AnnotatedRow>> {
        let index = dataset.column_index(text_field).ok_or_else(|| {
            AnalyzerError::MissingTextColumn {
                available: dataset.headers().to_vec(),
            }
        })?;

        dataset
            .rows()
            .iter()
            .enumerate()
            .map(|(i, fields)| {
                let text = fields[index].as_str();
                if text.trim().is_empty() {
                    return Err(AnalyzerError::EmptyText { row: i + 1 });
                }

                let emotions: Vec<&str> = self
                    .detector
                    .detect_emotions(text)
                    .iter()
                    .map(|e| e.as_str())
                    .collect();

                Ok(AnnotatedRow {
                    fields: fields.clone(),
                    sentiment: self.classifier.classify(text),
                    emotions: emotions.join(EMOTION_DELIMITER),
                })
            })
            .collect()
    }

    /// Annotate the dataset and compute both frequency distributions
    pub fn analyze(&self, dataset: &Dataset, text_field: &str) -> Result<BatchAnalysis> {
        let rows = self.annotate(dataset, text_field)?;
        let (sentiment, emotions) = frequencies(&rows);

        tracing::info!(
            rows = rows.len(),
            emotion_tags = emotions.total(),
            distinct_emotions = emotions.len(),
            "Batch analysis complete"
        );
        if rows.is_empty() {
            tracing::warn!("Dataset has no rows; distributions are empty");
        }

        Ok(BatchAnalysis {
            headers: dataset.headers().to_vec(),
            rows,
            sentiment,
            emotions,
        })
    }
}

/// Sentiment and emotion distributions over annotated rows
pub fn frequencies(rows: &[AnnotatedRow]) -> (FrequencyDistribution, FrequencyDistribution) {
    let sentiment =
        FrequencyDistribution::count_sorted_by_key(rows.iter().map(|row| row.sentiment.as_str()));
    let emotions =
        FrequencyDistribution::count_by_descending(rows.iter().flat_map(|row| row.emotion_tags()));
    (sentiment, emotions)
}
