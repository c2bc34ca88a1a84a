//! CSV table glue for the masking CLI.
//!
//! The table keeps every cell as a string so columns that are not being
//! masked pass through unchanged; only target columns are parsed to `f64`
//! and re-rendered. Empty cells parse as NaN (missing value) and are caught
//! by the core's dataset validation rather than a parse failure here.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// A CSV file held in memory: one header row plus data rows, all as strings.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Find a column by (trimmed) header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers.iter().position(|h| h.trim() == wanted)
    }

    /// Parse one column to `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotNumeric`] for a non-empty cell that does not
    /// parse, reporting the 1-based CSV line (the header is line 1).
    pub fn numeric_column(&self, index: usize) -> Result<Vec<f64>, AppError> {
        let column = &self.headers[index];
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let raw = cells.get(index).map_or("", String::as_str).trim();
                if raw.is_empty() {
                    return Ok(f64::NAN);
                }
                raw.parse::<f64>().map_err(|_| AppError::NotNumeric {
                    column: column.clone(),
                    value: raw.to_string(),
                    line: row + 2,
                })
            })
            .collect()
    }

    /// Overwrite one column with freshly rendered numeric values.
    pub fn replace_column(&mut self, index: usize, values: &[f64]) {
        for (cells, value) in self.rows.iter_mut().zip(values) {
            if let Some(cell) = cells.get_mut(index) {
                *cell = value.to_string();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Reading and writing
// ---------------------------------------------------------------------------

fn read_from<R: Read>(reader: R) -> Result<Table, AppError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.iter().map(ToString::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(ToString::to_string).collect());
    }
    Ok(Table { headers, rows })
}

/// Read a CSV file into a [`Table`].
///
/// # Errors
///
/// Returns [`AppError::ReadInput`] if the file cannot be opened, or
/// [`AppError::Csv`] for malformed CSV.
pub fn read_table(path: &Path) -> Result<Table, AppError> {
    let file = File::open(path).map_err(|source| AppError::ReadInput {
        path: path.display().to_string(),
        source,
    })?;
    read_from(BufReader::new(file))
}

/// Write a [`Table`] back out as CSV.
///
/// # Errors
///
/// Returns [`AppError::WriteOutput`] if the file cannot be created or
/// flushed, or [`AppError::Csv`] for a record that fails to serialize.
pub fn write_table(path: &Path, table: &Table) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::WriteOutput {
        path: path.display().to_string(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush().map_err(|source| AppError::WriteOutput {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
