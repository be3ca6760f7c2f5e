use crate::error::IngestError;
use chrono::{NaiveDate, NaiveDateTime};
use model::{
    core::{data_type::DataType, value::Value},
    records::chunk::Chunk,
    schema::{ColumnDef, TableSchema},
};

/// Accepted textual date/time layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(text, format) {
            return Some(ts);
        }
    }
    // A bare date becomes midnight
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Resolve configured date/time column names against the source schema.
/// Missing columns are a configuration error, surfaced before any read.
pub fn resolve_dt_columns(
    columns: &[ColumnDef],
    dt_cols: &[String],
) -> Result<Vec<String>, IngestError> {
    let mut resolved = Vec::with_capacity(dt_cols.len());
    for requested in dt_cols {
        let column = columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(requested))
            .ok_or_else(|| IngestError::ColumnNotFound(requested.clone()))?;
        resolved.push(column.name.clone());
    }
    Ok(resolved)
}

/// The destination schema once the configured columns carry a date/time type.
pub fn schema_with_datetime(schema: &TableSchema, dt_cols: &[String]) -> TableSchema {
    let columns = schema
        .columns
        .iter()
        .map(|col| {
            let mut col = col.clone();
            if dt_cols.iter().any(|c| c.eq_ignore_ascii_case(&col.name)) {
                col.data_type = DataType::Timestamp;
            }
            col
        })
        .collect();
    TableSchema::new(&schema.name, columns)
}

/// Convert every row's value in the configured columns from text to a
/// date/time value. A single unparseable value fails the whole chunk; no
/// partially-converted chunk ever reaches the writer.
pub fn convert_datetime_columns(chunk: &mut Chunk, dt_cols: &[String]) -> Result<(), IngestError> {
    for (offset, row) in chunk.rows.iter_mut().enumerate() {
        let row_index = chunk.first_index + offset;
        for column in dt_cols {
            let Some(field) = row.get_mut(column) else {
                continue;
            };
            let converted = match field.value.take() {
                None | Some(Value::Null) => None,
                Some(Value::Timestamp(ts)) => Some(Value::Timestamp(ts)),
                Some(Value::Date(d)) => d.and_hms_opt(0, 0, 0).map(Value::Timestamp),
                Some(other) => {
                    let text = other.as_string().unwrap_or_default();
                    let ts = parse_datetime(&text).ok_or_else(|| IngestError::Transform {
                        column: column.clone(),
                        row_index,
                        value: text.clone(),
                    })?;
                    Some(Value::Timestamp(ts))
                }
            };
            field.value = converted;
            field.data_type = DataType::Timestamp;
        }
    }
    Ok(())
}
