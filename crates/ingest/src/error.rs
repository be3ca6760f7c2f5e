use connectors::{file::csv::error::FileError, sql::error::DbError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// A configured date/time column does not exist in the source. Fatal;
    /// raised before any chunk is read or written.
    #[error("Date/time column not found in source: {0}")]
    ColumnNotFound(String),

    /// The source reader failed mid-read.
    #[error("Source error: {0}")]
    Source(#[from] FileError),

    /// A value could not be converted to a date/time type.
    #[error("Cannot convert value {value:?} in column '{column}' at row {row_index}")]
    Transform {
        column: String,
        row_index: usize,
        value: String,
    },

    /// The destination rejected the chunk.
    #[error("Write error: {0}")]
    Write(#[from] DbError),
}
