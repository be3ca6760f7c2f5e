use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut FieldValue> {
        self.field_values
            .iter_mut()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data_type::DataType;

    fn field(name: &str, value: Option<Value>) -> FieldValue {
        FieldValue {
            name: name.to_string(),
            value,
            data_type: DataType::String,
        }
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let row = RowData::new("trips", vec![field("VendorID", Some(Value::Int(2)))]);
        assert!(row.get("vendorid").is_some());
        assert_eq!(row.get_value("VENDORID"), Value::Int(2));
    }

    #[test]
    fn test_missing_field_is_null() {
        let row = RowData::new("trips", vec![]);
        assert_eq!(row.get_value("anything"), Value::Null);
    }
}
