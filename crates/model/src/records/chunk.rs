use crate::records::row::RowData;

/// One bounded batch of rows read from the source.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Zero-based index of the first row within the source file.
    pub first_index: usize,
    pub rows: Vec<RowData>,
}

impl Chunk {
    pub fn new(first_index: usize, rows: Vec<RowData>) -> Self {
        Chunk { first_index, rows }
    }

    /// Index of the last row within the source file.
    pub fn last_index(&self) -> usize {
        self.first_index + self.rows.len().saturating_sub(1)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Outcome of a single source read, keeping end-of-data distinct from
/// every other error the reader can produce.
#[derive(Debug)]
pub enum ChunkRead {
    Chunk(Chunk),
    EndOfData,
}
