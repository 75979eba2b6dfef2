use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the cash-book file at startup
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cash book file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file format '.{0}' (expected .xlsx, .xls, .xlsb, .ods or .csv)")]
    UnsupportedFormat(String),

    #[error("Spreadsheet error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Sheet '{sheet}' not found (available: {})", .available.join(", "))]
    SheetNotFound { sheet: String, available: Vec<String> },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
