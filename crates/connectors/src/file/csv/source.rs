use crate::file::csv::{
    adapter::CsvAdapter,
    error::FileError,
    metadata::{CsvColumnMetadata, CsvMetadata},
    types::CsvType,
};
use model::{
    core::value::FieldValue,
    records::{
        chunk::{Chunk, ChunkRead},
        row::RowData,
    },
    schema::ColumnDef,
};

/// A source that hands out bounded chunks of rows in file order and signals
/// end-of-data distinctly from read errors.
pub trait ChunkSource: Send {
    /// Shared column schema for every chunk of the run.
    fn columns(&self) -> &[ColumnDef];

    fn fetch(&mut self, chunk_size: usize) -> Result<ChunkRead, FileError>;

    /// How many rows have been consumed from the file so far.
    fn rows_read(&self) -> usize;
}

pub struct CsvDataSource {
    pub adapter: CsvAdapter,
    pub metadata: CsvMetadata,
    columns: Vec<ColumnDef>,
    rows_read: usize,
}

impl CsvDataSource {
    pub fn new(adapter: CsvAdapter) -> Result<Self, FileError> {
        let metadata = adapter.fetch_metadata()?;
        let columns = metadata.to_table_schema(&metadata.name).columns;
        Ok(CsvDataSource {
            adapter,
            metadata,
            columns,
            rows_read: 0,
        })
    }

    fn headers_meta(&self) -> Vec<CsvColumnMetadata> {
        self.metadata.columns.clone()
    }
}

impl ChunkSource for CsvDataSource {
    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn fetch(&mut self, chunk_size: usize) -> Result<ChunkRead, FileError> {
        let entity_name = self.metadata.name.clone();
        let headers_meta = self.headers_meta();
        let first_index = self.rows_read;

        let mut data_iter = self
            .adapter
            .data_iter
            .lock()
            .map_err(|_| FileError::LockError("Failed to lock CSV reader".into()))?;

        let mut rows = Vec::with_capacity(chunk_size.min(8192));
        let mut reached_end = false;

        while rows.len() < chunk_size {
            match data_iter.next() {
                Some(Ok(record)) => {
                    self.rows_read += 1;

                    let mut fields = Vec::with_capacity(headers_meta.len());
                    for col_meta in headers_meta.iter() {
                        let cell = record.get(col_meta.ordinal).unwrap_or("");
                        let value = col_meta.data_type.get_value(cell);

                        // The schema is sampled from the head of the file; a
                        // later value that no longer fits must not be silently
                        // nulled out
                        if value.is_none() && !cell.is_empty() {
                            return Err(FileError::TypeMismatch(format!(
                                "column '{}', row {}: {:?}",
                                col_meta.name,
                                self.rows_read - 1,
                                cell
                            )));
                        }

                        fields.push(FieldValue {
                            name: col_meta.name.clone(),
                            value,
                            data_type: col_meta.data_type.clone(),
                        });
                    }

                    rows.push(RowData::new(&entity_name, fields));
                }
                Some(Err(e)) => {
                    // The bad record is consumed; the next fetch resumes after it
                    self.rows_read += 1;
                    return Err(FileError::ReadError(format!(
                        "Error reading CSV record: {e}"
                    )));
                }
                // End of file
                None => {
                    reached_end = true;
                    break;
                }
            }
        }

        if rows.is_empty() && reached_end {
            return Ok(ChunkRead::EndOfData);
        }

        Ok(ChunkRead::Chunk(Chunk::new(first_index, rows)))
    }

    fn rows_read(&self) -> usize {
        self.rows_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::csv::adapter::CsvSettings;
    use model::core::value::Value;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_with_settings(
        content: &str,
        settings: CsvSettings,
    ) -> (CsvDataSource, NamedTempFile) {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        let adapter = CsvAdapter::new(file.path().to_str().unwrap(), settings).unwrap();
        let source = CsvDataSource::new(adapter).unwrap();
        (source, file)
    }

    fn source_for(content: &str) -> (CsvDataSource, NamedTempFile) {
        source_with_settings(content, CsvSettings::default())
    }

    #[test]
    fn test_fetch_respects_chunk_size() {
        let (mut source, _file) = source_for("id,v\n1,a\n2,b\n3,c\n4,d\n5,e\n");

        let first = source.fetch(2).unwrap();
        let ChunkRead::Chunk(chunk) = first else {
            panic!("expected a chunk");
        };
        assert_eq!(chunk.first_index, 0);
        assert_eq!(chunk.last_index(), 1);
        assert_eq!(chunk.row_count(), 2);

        let second = source.fetch(2).unwrap();
        let ChunkRead::Chunk(chunk) = second else {
            panic!("expected a chunk");
        };
        assert_eq!(chunk.first_index, 2);
        assert_eq!(chunk.last_index(), 3);
    }

    #[test]
    fn test_final_partial_chunk_then_end_of_data() {
        let (mut source, _file) = source_for("id\n1\n2\n3\n");

        let ChunkRead::Chunk(chunk) = source.fetch(2).unwrap() else {
            panic!("expected a chunk");
        };
        assert_eq!(chunk.row_count(), 2);

        let ChunkRead::Chunk(chunk) = source.fetch(2).unwrap() else {
            panic!("expected a chunk");
        };
        assert_eq!(chunk.row_count(), 1);
        assert_eq!(chunk.first_index, 2);

        assert!(matches!(source.fetch(2).unwrap(), ChunkRead::EndOfData));
        // End-of-data is stable across repeated fetches
        assert!(matches!(source.fetch(2).unwrap(), ChunkRead::EndOfData));
    }

    #[test]
    fn test_values_are_typed() {
        let (mut source, _file) = source_for("id,amount,note\n7,1.25,hello\n");
        let ChunkRead::Chunk(chunk) = source.fetch(10).unwrap() else {
            panic!("expected a chunk");
        };
        let row = &chunk.rows[0];
        assert_eq!(row.get_value("id"), Value::Int(7));
        assert_eq!(row.get_value("amount"), Value::Float(1.25));
        assert_eq!(row.get_value("note"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_outside_sample_window_fails_the_fetch() {
        // Only the first two rows are sampled, so "v" infers as BIGINT; the
        // later "abc" must surface as an error, never as a silent NULL
        let mut settings = CsvSettings::default();
        settings.sample_size = 2;
        let (mut source, _file) = source_with_settings("v\n1\n2\nabc\n4\n", settings);

        let err = source.fetch(10).unwrap_err();
        assert!(matches!(err, FileError::TypeMismatch(_)));

        // The offending record was consumed; the next fetch resumes after it
        let ChunkRead::Chunk(chunk) = source.fetch(10).unwrap() else {
            panic!("expected a chunk");
        };
        assert_eq!(chunk.rows[0].get_value("v"), Value::Int(4));
    }

    #[test]
    fn test_empty_cell_is_null() {
        let (mut source, _file) = source_for("id,v\n1,\n");
        let ChunkRead::Chunk(chunk) = source.fetch(10).unwrap() else {
            panic!("expected a chunk");
        };
        assert_eq!(chunk.rows[0].get_value("v"), Value::Null);
    }
}
