//! Reporting
//!
//! - Bar chart rendering behind the `ChartRenderer` trait
//! - Result display behind the `ResultSink` trait
//! - The end-to-end CSV batch run producing charts and a summary

pub mod chart;

#[cfg(test)]
mod tests;

pub use chart::{BarChartRenderer, ChartRenderer};

use crate::analysis::{BatchAggregator, BatchAnalysis, TextAnalysis};
use crate::data::{Dataset, TEXT_COLUMN};
use crate::error::{AnalyzerError, Result};
use crate::sentiment::{EmotionEngine, PolarityEngine};
use crate::types::FrequencyDistribution;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const SENTIMENT_SUFFIX: &str = "_sentiment.png";
pub const EMOTIONS_SUFFIX: &str = "_emotions.png";

/// Displays result lines to the user
pub trait ResultSink {
    fn display(&mut self, lines: &[String]);
}

/// Writes result lines to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ResultSink for ConsoleSink {
    fn display(&mut self, lines: &[String]) {
        for line in lines {
            println!("{}", line);
        }
    }
}

impl ResultSink for Vec<String> {
    fn display(&mut self, lines: &[String]) {
        self.extend(lines.iter().cloned());
    }
}

/// Chart locations for an input file: `<stem>_sentiment.png` and `<stem>_emotions.png`
/// next to the input, or inside `output_dir` when given
pub fn chart_paths(input: &Path, output_dir: Option<&Path>) -> (PathBuf, PathBuf) {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "analysis".to_string());
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    (
        dir.join(format!("{}{}", stem, SENTIMENT_SUFFIX)),
        dir.join(format!("{}{}", stem, EMOTIONS_SUFFIX)),
    )
}

/// Lines for a single-text result
pub fn text_lines(result: &TextAnalysis) -> Vec<String> {
    let emotions = if result.emotions.is_empty() {
        "none".to_string()
    } else {
        result
            .emotions
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    vec![
        format!("Sentiment: {}", result.sentiment),
        format!("Emotions: {}", emotions),
    ]
}

/// Lines summarizing a batch: sentiment distribution and top emotions
pub fn summary_lines(
    sentiment: &FrequencyDistribution,
    emotions: &FrequencyDistribution,
    top_n: usize,
) -> Vec<String> {
    let mut lines = vec!["Sentiment distribution:".to_string()];
    lines.extend(sentiment.iter().map(|(k, v)| format!("  {}: {}", k, v)));
    lines.push(format!("Top emotions (top {}):", top_n));
    lines.extend(emotions.top(top_n).iter().map(|(k, v)| format!("  {}: {}", k, v)));
    lines
}

/// Options for a CSV batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub top_emotions: usize,
    /// Directory for charts; the input's directory when `None`
    pub output_dir: Option<PathBuf>,
    pub render_charts: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            top_emotions: 10,
            output_dir: None,
            render_charts: true,
        }
    }
}

/// Serializable summary of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub source: PathBuf,
    /// Original name of the column that was analyzed
    pub text_column: String,
    pub rows: usize,
    pub sentiment: FrequencyDistribution,
    /// How many emotions were kept
    pub top_n: usize,
    /// Top emotions only
    pub emotions: FrequencyDistribution,
    pub charts: Vec<PathBuf>,
    pub generated_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Analyzed {} rows from column '{}'",
            self.rows, self.text_column
        )];
        lines.extend(summary_lines(&self.sentiment, &self.emotions, self.top_n));
        for chart in &self.charts {
            lines.push(format!("Chart saved: {}", chart.display()));
        }
        lines
    }
}

/// Load a CSV, resolve its text column, analyze it and render both charts
pub fn run_batch<P, E, R>(
    aggregator: &BatchAggregator<P, E>,
    renderer: &R,
    input: &Path,
    options: &BatchOptions,
) -> Result<(BatchReport, BatchAnalysis)>
where
    P: PolarityEngine,
    E: EmotionEngine,
    R: ChartRenderer + ?Sized,
{
    let mut dataset = Dataset::from_csv_path(input)?;
    let text_column = dataset.resolve_text_column()?;
    tracing::info!(
        path = %input.display(),
        column = %text_column,
        rows = dataset.len(),
        "Starting batch analysis"
    );

    let analysis = aggregator.analyze(&dataset, TEXT_COLUMN)?;
    let top_emotions = analysis.emotions.top(options.top_emotions);

    let mut charts = Vec::new();
    if options.render_charts {
        let (sentiment_path, emotions_path) = chart_paths(input, options.output_dir.as_deref());
        charts.push(renderer.render_bar_chart(
            &analysis.sentiment,
            "Sentiment Distribution",
            &sentiment_path,
        )?);
        charts.push(renderer.render_bar_chart(
            &top_emotions,
            &format!("Top Emotions (Top {})", options.top_emotions),
            &emotions_path,
        )?);
    }

    let report = BatchReport {
        source: input.to_path_buf(),
        text_column,
        rows: analysis.row_count(),
        sentiment: analysis.sentiment.clone(),
        top_n: options.top_emotions,
        emotions: top_emotions,
        charts,
        generated_at: Utc::now(),
    };

    Ok((report, analysis))
}

/// Run `run_batch` on the blocking thread pool so the caller stays responsive
pub async fn run_batch_in_background<P, E, R>(
    aggregator: Arc<BatchAggregator<P, E>>,
    renderer: Arc<R>,
    input: PathBuf,
    options: BatchOptions,
) -> Result<(BatchReport, BatchAnalysis)>
where
    P: PolarityEngine + 'static,
    E: EmotionEngine + 'static,
    R: ChartRenderer + ?Sized + 'static,
{
    tokio::task::spawn_blocking(move || run_batch(&aggregator, renderer.as_ref(), &input, &options))
        .await
        .map_err(|e| AnalyzerError::Internal(format!("batch worker failed: {}", e)))?
}
