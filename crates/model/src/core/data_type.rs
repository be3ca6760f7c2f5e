use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataType {
    Int,
    Float,
    Boolean,
    Date,
    Timestamp,
    String,
    Null,
}

impl DataType {
    /// Name of the type as it appears in Postgres DDL.
    pub fn postgres_name(&self) -> Cow<'_, str> {
        match self {
            DataType::Int => Cow::Borrowed("BIGINT"),
            DataType::Float => Cow::Borrowed("DOUBLE PRECISION"),
            DataType::Boolean => Cow::Borrowed("BOOLEAN"),
            DataType::Date => Cow::Borrowed("DATE"),
            DataType::Timestamp => Cow::Borrowed("TIMESTAMP"),
            DataType::String => Cow::Borrowed("TEXT"),
            DataType::Null => Cow::Borrowed("TEXT"),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.postgres_name())
    }
}
