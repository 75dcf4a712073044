//! Error types shared by the traffic analytics operations.

use thiserror::Error;

/// Errors raised when an input table does not satisfy an operation's contract.
///
/// Every variant names the operation that rejected the input so callers can
/// tell which step of their workflow failed.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TableError {
    /// Required column is absent from the input table.
    #[error("{operation}: required column '{column}' not found")]
    MissingColumn {
        /// Operation that required the column.
        operation: &'static str,
        /// The missing column name.
        column: String,
    },

    /// A required cell is null.
    #[error("{operation}: null value in column '{column}' at row {row}")]
    NullValue {
        /// Operation that read the cell.
        operation: &'static str,
        /// Column holding the null.
        column: String,
        /// Zero-based row position.
        row: usize,
    },

    /// A cell could not be interpreted.
    #[error("{operation}: invalid value '{value}' in column '{column}' at row {row}: {reason}")]
    InvalidValue {
        /// Operation that read the cell.
        operation: &'static str,
        /// Column holding the value.
        column: String,
        /// Zero-based row position.
        row: usize,
        /// The offending value as text.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A mean was requested over zero rows.
    #[error("{operation}: no rows selected to average column '{column}'")]
    EmptySelection {
        /// Operation computing the mean.
        operation: &'static str,
        /// Column being averaged.
        column: String,
    },

    /// Two input rows address the same matrix cell.
    #[error("{operation}: duplicate entry for row '{row}' and column '{column}'")]
    DuplicateEntry {
        /// Operation building the matrix.
        operation: &'static str,
        /// Row label of the duplicated cell.
        row: String,
        /// Column label of the duplicated cell.
        column: String,
    },

    /// Matrix dimensions do not fit the operation.
    #[error("{operation}: unexpected matrix shape {rows}x{columns}")]
    ShapeMismatch {
        /// Operation that checked the shape.
        operation: &'static str,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        columns: usize,
    },

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Result type for traffic analytics operations.
pub type Result<T> = std::result::Result<T, TableError>;
