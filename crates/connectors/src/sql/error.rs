use thiserror::Error;

/// All errors coming from the database/query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any Postgres driver error.
    #[error("Postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// Writing rows to the database failed at the application level.
    #[error("Write error: {0}")]
    Write(String),
}

/// Errors happening during connection setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("Postgres connection failed: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}
