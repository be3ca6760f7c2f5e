use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Lock error: {0}")]
    LockError(String),
    #[error("Error reading CSV file: {0}")]
    ReadError(String),
    #[error("Value does not fit the inferred column type: {0}")]
    TypeMismatch(String),
}
