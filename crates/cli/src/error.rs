use connectors::{file::csv::error::FileError, sql::error::ConnectorError};
use ingest::error::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to open the source file: {0}")]
    SourceOpen(#[from] FileError),

    #[error("Failed to connect to the database: {0}")]
    Connect(#[from] ConnectorError),

    #[error("Ingestion failed: {0}")]
    Ingest(#[from] IngestError),
}
