//! Formatting utilities for the Contxt CLI.
//!
//! Provides the output format selection (table, JSON, CSV) and the console
//! renderers the command actions hand their rows to.

use crate::projection::Row;
use comfy_table::{presets::ASCII_MARKDOWN, Cell, ContentArrangement, Row as TableRow, Table};
use csv::Writer;
use serde::Serialize;
use std::str::FromStr;
use strum::EnumIter;

pub const TABLE: &str = "table";
pub const JSON: &str = "json";
pub const CSV: &str = "csv";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
    #[error("CSV writer into inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<Writer<Vec<u8>>>),
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum OutputFormat {
    /// Console table (the default)
    Table,
    /// JSON (JavaScript Object Notation) format
    Json,
    /// CSV (Comma-Separated Values) format
    Csv,
}

impl OutputFormat {
    /// Returns all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        vec![TABLE, JSON, CSV]
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        match format_str.to_lowercase().as_str() {
            TABLE => Ok(OutputFormat::Table),
            JSON => Ok(OutputFormat::Json),
            CSV => Ok(OutputFormat::Csv),
            other => Err(FormattingError::UnsupportedOutputFormat(other.to_string())),
        }
    }
}

/// Render rows as a console table, optionally sorted by one column.
///
/// Rows are uniform by construction (projection gives every row the same
/// key set); the header comes from the first row. An unknown sort column
/// sorts all rows with an empty key, preserving their relative order.
pub fn to_table(rows: &[Row], sort_by: Option<&str>) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(first) = rows.first() {
        table.set_header(first.keys().collect::<Vec<_>>());
    }

    let mut ordered: Vec<&Row> = rows.iter().collect();
    if let Some(sort_key) = sort_by {
        ordered.sort_by_key(|row| row.get(sort_key).map(Row::cell_text).unwrap_or_default());
    }

    for row in ordered {
        let mut table_row = TableRow::new();
        for (_, value) in row.columns() {
            table_row.add_cell(Cell::new(Row::cell_text(value)));
        }
        table.add_row(table_row);
    }
    table.to_string()
}

/// Render rows as CSV with a header line.
pub fn to_csv(rows: &[Row]) -> Result<String, FormattingError> {
    let mut wtr = Writer::from_writer(Vec::new());
    if let Some(first) = rows.first() {
        wtr.write_record(first.keys())?;
    }
    for row in rows {
        wtr.write_record(row.columns().iter().map(|(_, v)| Row::cell_text(v)))?;
    }
    let bytes = wtr.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Serialize any sequence of items as a JSON array.
pub fn to_json<T: Serialize>(items: &[T], pretty: bool) -> Result<String, FormattingError> {
    if pretty {
        Ok(serde_json::to_string_pretty(items)?)
    } else {
        Ok(serde_json::to_string(items)?)
    }
}

/// Print a warning to stderr, in red.
pub fn warn(msg: &str) {
    color_print::ceprintln!("<red>{}</red>", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::pluck;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Site {
        name: String,
        city: String,
    }

    fn sites() -> Vec<Site> {
        vec![
            Site {
                name: "Zeta".to_string(),
                city: "Tulsa".to_string(),
            },
            Site {
                name: "Alpha".to_string(),
                city: "Boise".to_string(),
            },
        ]
    }

    fn rows() -> Vec<crate::projection::Row> {
        pluck(&["name".to_string(), "city".to_string()], &sites()).unwrap()
    }

    #[test]
    fn table_has_header_and_all_rows() {
        let out = to_table(&rows(), None);
        assert!(out.contains("name"));
        assert!(out.contains("city"));
        assert!(out.contains("Zeta"));
        assert!(out.contains("Alpha"));
    }

    #[test]
    fn table_sorts_rows_by_the_requested_column() {
        let out = to_table(&rows(), Some("name"));
        let alpha = out.find("Alpha").unwrap();
        let zeta = out.find("Zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn csv_output_has_header_line() {
        let out = to_csv(&rows()).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("name,city"));
        assert_eq!(lines.next(), Some("Zeta,Tulsa"));
        assert_eq!(lines.next(), Some("Alpha,Boise"));
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!(OutputFormat::from_str("Table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(FormattingError::UnsupportedOutputFormat(_))
        ));
    }
}
