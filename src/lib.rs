//! Sentiment & Emotion Analyzer
//!
//! Classifies free text as positive, negative or neutral, tags it with
//! lexicon-based emotions, and summarizes whole CSV datasets as frequency
//! distributions rendered to bar charts.

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod sentiment;
pub mod types;


pub use analysis::{BatchAggregator, BatchAnalysis, TextAnalysis};
pub use config::Config;
pub use error::{AnalyzerError, Result};
pub use types::{Emotion, FrequencyDistribution, SentimentLabel};
