//! Sentiment & Emotion Analyzer
//!
//! Command line front end: analyze one text or a whole CSV file.

use anyhow::Context;
use clap::{Parser, Subcommand};
use sentiment_analyzer::{
    analysis::BatchAggregator,
    config::Config,
    data::{find_text_column, Dataset, ACCEPTED_TEXT_COLUMNS},
    report::{self, BarChartRenderer, BatchOptions, ConsoleSink, ResultSink},
    sentiment::{load_engines, EmotionLexicon, SentimentAnalyzer},
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Aggregator = BatchAggregator<SentimentAnalyzer, EmotionLexicon>;

#[derive(Parser)]
#[command(name = "sentiment-analyzer")]
#[command(about = "Sentiment and emotion analysis for text and CSV datasets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to sentiment.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single text
    Text {
        /// Text to analyze
        text: String,
    },
    /// Analyze a CSV file with a text, review or comment column
    Csv {
        /// Path to the CSV file
        path: PathBuf,
        /// Number of top emotions to report
        #[arg(short, long)]
        top: Option<usize>,
        /// Directory for the chart images
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Write the dataset with sentiment and emotions columns to this path
        #[arg(long)]
        annotated: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,
    },
    /// List a CSV file's columns and the detected text column
    Columns {
        /// Path to the CSV file
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for results
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_default()?,
    };

    match cli.command {
        Commands::Text { text } => analyze_text(&config, &text),
        Commands::Csv {
            path,
            top,
            output_dir,
            annotated,
            json,
            no_charts,
        } => {
            let options = BatchOptions {
                top_emotions: top.unwrap_or(config.report.top_emotions),
                output_dir: output_dir.or_else(|| config.report.output_dir()),
                render_charts: !no_charts,
            };
            if options.top_emotions == 0 {
                anyhow::bail!("--top must be at least 1");
            }
            analyze_csv(&config, path, options, annotated, json).await
        }
        Commands::Columns { path } => show_columns(&path),
    }
}

fn build_aggregator(config: &Config) -> anyhow::Result<Aggregator> {
    let (polarity, emotions) = load_engines(&config.lexicon)?;
    tracing::debug!(emotion_words = emotions.len(), "Engines ready");
    Ok(BatchAggregator::with_engines(polarity, emotions))
}

fn analyze_text(config: &Config, text: &str) -> anyhow::Result<()> {
    let aggregator = build_aggregator(config)?;
    let result = aggregator.analyze_text(text)?;
    ConsoleSink.display(&report::text_lines(&result));
    Ok(())
}

async fn analyze_csv(
    config: &Config,
    path: PathBuf,
    options: BatchOptions,
    annotated: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let aggregator = Arc::new(build_aggregator(config)?);
    let renderer = Arc::new(BarChartRenderer::new(config.chart.clone()));

    let (batch, analysis) =
        report::run_batch_in_background(aggregator, renderer, path, options).await?;

    if let Some(out) = annotated {
        let file = File::create(&out)
            .with_context(|| format!("failed to create {}", out.display()))?;
        analysis.annotated_dataset()?.write_csv(file)?;
        tracing::info!(path = %out.display(), rows = analysis.row_count(), "Annotated dataset written");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        ConsoleSink.display(&batch.lines());
    }
    Ok(())
}

fn show_columns(path: &Path) -> anyhow::Result<()> {
    let dataset = Dataset::from_csv_path(path)?;
    let mut lines = vec![format!("Rows: {}", dataset.len()), "Columns:".to_string()];
    lines.extend(dataset.headers().iter().map(|h| format!("  {}", h)));

    match find_text_column(dataset.headers()) {
        Some(idx) => lines.push(format!("Text column: {}", dataset.headers()[idx])),
        None => lines.push(format!(
            "Text column: none (expected one of: {})",
            ACCEPTED_TEXT_COLUMNS.join(", ")
        )),
    }

    ConsoleSink.display(&lines);
    Ok(())
}
