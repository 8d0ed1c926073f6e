//! Input data handling
//!
//! - CSV loading into an in-memory `Dataset`
//! - Case-insensitive text column detection and renaming
//! - CSV export of (annotated) datasets

pub mod dataset;

#[cfg(test)]
mod tests;

pub use dataset::{find_text_column, Dataset, ACCEPTED_TEXT_COLUMNS, TEXT_COLUMN};
