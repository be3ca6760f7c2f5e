/// Rows fetched per chunk. A configuration constant, not derived from data.
pub const DEFAULT_CHUNK_SIZE: usize = 100_000;

/// Immutable parameters for one ingestion run, supplied once at start.
#[derive(Debug, Clone)]
pub struct IngestParams {
    pub table_name: String,
    /// Column names to convert to a date/time type, in the order given.
    pub dt_cols: Vec<String>,
    pub chunk_size: usize,
}

impl IngestParams {
    pub fn new(table_name: &str, dt_cols: Vec<String>) -> Self {
        IngestParams {
            table_name: table_name.to_string(),
            dt_cols,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
