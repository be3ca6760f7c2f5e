use crate::file::csv::{
    error::FileError,
    metadata::{CsvColumnMetadata, CsvMetadata, normalize_col_name},
    types::CsvType,
};
use model::core::data_type::DataType;
use std::{
    fs::File,
    path::Path,
    sync::{Arc, Mutex},
};

#[derive(Clone)]
pub struct CsvSettings {
    pub delimiter: char,
    pub has_headers: bool,
    pub sample_size: usize,
}

impl CsvSettings {
    pub fn new(delimiter: char, has_headers: bool) -> Self {
        CsvSettings {
            delimiter,
            has_headers,
            sample_size: 1000,
        }
    }
}

impl Default for CsvSettings {
    fn default() -> Self {
        CsvSettings::new(',', true)
    }
}

#[derive(Clone)]
pub struct CsvAdapter {
    /// Used only when inferring schema or re-reading headers
    pub meta_reader: Arc<Mutex<csv::Reader<File>>>,

    /// Used as a one-pass streaming iterator for actual data rows
    pub data_iter: Arc<Mutex<csv::StringRecordsIntoIter<File>>>,

    pub settings: CsvSettings,
    pub headers: Vec<String>,
    pub name: String,
}

impl CsvAdapter {
    pub fn new(file_path: &str, settings: CsvSettings) -> Result<Self, FileError> {
        // Build a shared builder so we don't repeat options
        let mut builder = csv::ReaderBuilder::new();
        let builder = builder
            .delimiter(settings.delimiter as u8)
            .has_headers(settings.has_headers)
            .flexible(true);

        // Open file + reader for metadata
        let meta_file = File::open(file_path)?;
        let mut meta_rdr = builder.from_reader(meta_file);
        let headers = meta_rdr.headers()?.iter().map(String::from).collect();

        // Open file + into_records iterator for streaming data
        let data_file = File::open(file_path)?;
        let data_rdr = builder.from_reader(data_file);
        let data_iter = data_rdr.into_records();

        let name = Path::new(file_path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_path)
            .to_string();

        Ok(CsvAdapter {
            meta_reader: Arc::new(Mutex::new(meta_rdr)),
            data_iter: Arc::new(Mutex::new(data_iter)),
            settings,
            headers,
            name,
        })
    }

    /// Sample the first rows to infer per-column types and nullability.
    pub fn fetch_metadata(&self) -> Result<CsvMetadata, FileError> {
        // Lock the reader for the entire sampling process
        let mut reader = self
            .meta_reader
            .lock()
            .map_err(|_| FileError::LockError("Failed to lock CSV reader".into()))?;

        // Initialize column metadata from headers
        let headers = reader.headers()?;
        let mut columns: Vec<CsvColumnMetadata> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| CsvColumnMetadata {
                name: normalize_col_name(h),
                data_type: DataType::Int,
                is_nullable: false,
                ordinal: i,
            })
            .collect();

        for result in reader.records().take(self.settings.sample_size) {
            let record = result?;
            for (col_meta, field) in columns.iter_mut().zip(record.iter()) {
                if field.is_empty() {
                    col_meta.is_nullable = true;
                }
                col_meta.data_type = col_meta.data_type.promote(field);
            }
        }

        Ok(CsvMetadata {
            name: self.name.clone(),
            columns,
            delimiter: self.settings.delimiter,
            has_header: self.settings.has_headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn test_metadata_inference() {
        let file = write_csv("id,amount,Pickup Time\n1,1.5,2019-01-15 03:05:00\n2,2.0,\n");
        let adapter =
            CsvAdapter::new(file.path().to_str().unwrap(), CsvSettings::default()).unwrap();
        let meta = adapter.fetch_metadata().unwrap();

        assert_eq!(meta.columns.len(), 3);
        assert_eq!(meta.columns[0].name, "id");
        assert_eq!(meta.columns[0].data_type, DataType::Int);
        assert_eq!(meta.columns[1].data_type, DataType::Float);
        assert_eq!(meta.columns[2].name, "pickup_time");
        assert_eq!(meta.columns[2].data_type, DataType::String);
        assert!(meta.columns[2].is_nullable);
    }

    #[test]
    fn test_headers_preserved_in_order() {
        let file = write_csv("b,a\n1,2\n");
        let adapter =
            CsvAdapter::new(file.path().to_str().unwrap(), CsvSettings::default()).unwrap();
        assert_eq!(adapter.headers, vec!["b", "a"]);
    }
}
