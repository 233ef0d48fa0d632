//! Error types for kwgraph-core.

use thiserror::Error;

/// Result type alias for kwgraph-core operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that abort a graph build.
///
/// There is no partial output: any of these stops the run before the
/// output file is touched.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The workbook could not be opened or parsed.
    #[error("Failed to read workbook {path}: {message}")]
    Workbook {
        /// Path of the workbook.
        path: String,
        /// Underlying reader message.
        message: String,
    },

    /// The requested sheet does not exist.
    #[error("Sheet not found: {sheet}")]
    SheetNotFound {
        /// Requested sheet name.
        sheet: String,
    },

    /// The workbook has no sheets, or the sheet has no header row.
    #[error("Workbook has no data")]
    EmptyWorkbook,

    /// The header row lacks a required column.
    #[error("Missing column: {column}")]
    MissingColumn {
        /// Expected header name.
        column: String,
    },

    /// A required column holds an empty or non-text cell.
    #[error("Row {row}: column '{column}' is not text")]
    NonTextCell {
        /// Spreadsheet row number (1-based, header is row 1).
        row: usize,
        /// Column header name.
        column: String,
    },

    /// IO error writing the output file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
