use crate::sql::error::DbError;
use async_trait::async_trait;
use model::{records::row::RowData, schema::TableSchema};

/// A table writer: create-or-replace from a schema plus append-only inserts.
#[async_trait]
pub trait TableDestination: Send + Sync {
    /// Drops any existing table of the same name and creates it fresh from
    /// the given schema. Destructive, no confirmation.
    async fn create_table(&self, schema: &TableSchema) -> Result<(), DbError>;

    /// Appends rows to the table. Each call is its own implicit unit of work.
    async fn append_rows(&self, schema: &TableSchema, rows: &[RowData]) -> Result<u64, DbError>;
}
