use model::schema::TableSchema;

/// Quote an identifier for Postgres, doubling any embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// DROP TABLE IF EXISTS statement for the replace-on-first-chunk path.
pub fn drop_table(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {};", quote_identifier(table))
}

/// CREATE TABLE statement from the inferred schema. Also serves as the
/// schema preview, rendered without touching the connection.
pub fn create_table(schema: &TableSchema) -> String {
    let mut sql = String::from("CREATE TABLE ");
    sql.push_str(&quote_identifier(&schema.name));
    sql.push_str(" (\n");

    for (i, col) in schema.columns.iter().enumerate() {
        if i > 0 {
            sql.push_str(",\n");
        }
        sql.push_str("    ");
        sql.push_str(&quote_identifier(&col.name));
        sql.push(' ');
        sql.push_str(&col.data_type.postgres_name());
        if !col.is_nullable {
            sql.push_str(" NOT NULL");
        }
    }

    sql.push_str("\n);");
    sql
}

/// COPY ... FROM STDIN statement for appending one chunk.
pub fn copy_from_stdin(schema: &TableSchema) -> String {
    let columns = schema
        .columns
        .iter()
        .map(|c| quote_identifier(&c.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "COPY {} ({}) FROM STDIN WITH (FORMAT csv, NULL '\\N');",
        quote_identifier(&schema.name),
        columns
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{core::data_type::DataType, schema::ColumnDef};

    fn schema() -> TableSchema {
        TableSchema::new(
            "trips",
            vec![
                ColumnDef {
                    name: "id".to_string(),
                    data_type: DataType::Int,
                    is_nullable: false,
                    ordinal: 0,
                },
                ColumnDef {
                    name: "pickup_time".to_string(),
                    data_type: DataType::Timestamp,
                    is_nullable: true,
                    ordinal: 1,
                },
            ],
        )
    }

    #[test]
    fn test_drop_table() {
        assert_eq!(drop_table("trips"), r#"DROP TABLE IF EXISTS "trips";"#);
    }

    #[test]
    fn test_create_table() {
        let sql = create_table(&schema());
        assert_eq!(
            sql,
            "CREATE TABLE \"trips\" (\n    \"id\" BIGINT NOT NULL,\n    \"pickup_time\" TIMESTAMP\n);"
        );
    }

    #[test]
    fn test_copy_from_stdin() {
        assert_eq!(
            copy_from_stdin(&schema()),
            "COPY \"trips\" (\"id\", \"pickup_time\") FROM STDIN WITH (FORMAT csv, NULL '\\N');"
        );
    }

    #[test]
    fn test_quote_identifier_escapes() {
        assert_eq!(quote_identifier(r#"we"ird"#), r#""we""ird""#);
    }
}
