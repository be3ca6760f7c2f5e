use model::{
    core::data_type::DataType,
    schema::{ColumnDef, TableSchema},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CsvColumnMetadata {
    pub name: String,
    pub data_type: DataType,
    pub is_nullable: bool,
    pub ordinal: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CsvMetadata {
    pub name: String,
    pub columns: Vec<CsvColumnMetadata>,
    pub delimiter: char,
    pub has_header: bool,
}

impl CsvMetadata {
    /// Destination schema as inferred from the sampled column types.
    pub fn to_table_schema(&self, table: &str) -> TableSchema {
        let columns = self
            .columns
            .iter()
            .map(|c| ColumnDef {
                name: c.name.clone(),
                data_type: c.data_type.clone(),
                is_nullable: c.is_nullable,
                ordinal: c.ordinal,
            })
            .collect();
        TableSchema::new(table, columns)
    }
}

pub fn normalize_col_name(name: &str) -> String {
    name.replace(" ", "_")
        .replace("-", "_")
        .replace(".", "_")
        .replace("(", "_")
        .replace(")", "_")
        .replace(",", "_")
        .to_lowercase()
}
