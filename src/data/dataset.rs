//! Tabular dataset loading and text column resolution

use crate::error::{AnalyzerError, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Canonical name of the column the aggregator reads
pub const TEXT_COLUMN: &str = "text";

/// Column names accepted as the text source, compared case-insensitively
pub const ACCEPTED_TEXT_COLUMNS: [&str; 3] = ["text", "review", "comment"];

/// In-memory table: a header row plus string records of equal width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset, checking that every row matches the header width
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(AnalyzerError::UnreadableInput(format!(
                "row {} has {} fields, expected {}",
                i + 1,
                row.len(),
                headers.len()
            )));
        }
        Ok(Self { headers, rows })
    }

    /// Single-column dataset under the canonical text column
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: vec![TEXT_COLUMN.to_string()],
            rows: texts.into_iter().map(|t| vec![t.into()]).collect(),
        }
    }

    /// Load a CSV file with a header row
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AnalyzerError::UnreadableInput(format!("{}: {}", path.display(), e))
        })?;
        let dataset = Self::from_csv_reader(file)?;
        tracing::debug!(
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.headers.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV with a header row. Ragged rows are rejected as a whole.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(AnalyzerError::UnreadableInput(
                "missing header row".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with exactly this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Values of a named column, in row order
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Rename a column in place
    pub fn rename_column(&mut self, index: usize, name: &str) {
        if let Some(header) = self.headers.get_mut(index) {
            *header = name.to_string();
        }
    }

    /// Find the text column and rename it to the canonical name.
    ///
    /// Returns the column's original name.
    pub fn resolve_text_column(&mut self) -> Result<String> {
        let index = find_text_column(&self.headers).ok_or_else(|| {
            AnalyzerError::MissingTextColumn {
                available: self.headers.clone(),
            }
        })?;

        let original = self.headers[index].clone();
        if original != TEXT_COLUMN {
            tracing::debug!(column = %original, "Renaming text column to {}", TEXT_COLUMN);
            self.rename_column(index, TEXT_COLUMN);
        }
        Ok(original)
    }

    /// Write the dataset as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Index of the first column (in column order) whose lowercased name is accepted
pub fn find_text_column<S: AsRef<str>>(headers: &[S]) -> Option<usize> {
    headers.iter().position(|h| {
        let lower = h.as_ref().trim().to_lowercase();
        ACCEPTED_TEXT_COLUMNS.contains(&lower.as_str())
    })
}
