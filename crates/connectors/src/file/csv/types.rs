use model::core::{data_type::DataType, value::Value};

/// The promotion sequence: start at the current type and widen until it fits.
/// Date/time types are deliberately absent; a column only becomes a date/time
/// column through an explicit conversion requested by the caller, so a bare
/// sample like "2019-01-15 03:05:00" infers as TEXT.
const CHAIN: &[DataType] = &[
    DataType::Int,
    DataType::Float,
    DataType::Boolean,
    DataType::String,
];

/// Check if the type can parse the given string.
fn can_parse(data_type: &DataType, value: &str) -> bool {
    if value.is_empty() {
        return true; // treat empty as null
    }
    match *data_type {
        DataType::Int => value.parse::<i64>().is_ok(),
        DataType::Float => value.parse::<f64>().is_ok(),
        DataType::Boolean => matches!(value.to_lowercase().as_str(), "true" | "false"),
        DataType::String => true,
        _ => false,
    }
}

pub trait CsvType {
    fn promote(&self, value: &str) -> DataType;
    fn get_value(&self, value: &str) -> Option<Value>;
}

impl CsvType for DataType {
    fn promote(&self, value: &str) -> DataType {
        // Find our index in the promotion chain (fallback to start)
        let start = CHAIN.iter().position(|t| t == self).unwrap_or(0);
        // Find the first type from here onward that can parse the value
        CHAIN[start..]
            .iter()
            .find(|t| can_parse(t, value))
            .cloned()
            .unwrap_or(DataType::String)
    }

    fn get_value(&self, value: &str) -> Option<Value> {
        if value.is_empty() {
            return None;
        }
        match *self {
            DataType::Int => value.parse::<i64>().ok().map(Value::Int),
            DataType::Float => value.parse::<f64>().ok().map(Value::Float),
            DataType::Boolean => match value.to_lowercase().as_str() {
                "true" => Some(Value::Boolean(true)),
                "false" => Some(Value::Boolean(false)),
                _ => None,
            },
            // Columns typed wider than their sample still carry the raw text
            _ => Some(Value::String(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_int_stays_int() {
        assert_eq!(DataType::Int.promote("42"), DataType::Int);
    }

    #[test]
    fn test_promote_int_to_float() {
        assert_eq!(DataType::Int.promote("4.2"), DataType::Float);
    }

    #[test]
    fn test_promote_to_string_on_text() {
        assert_eq!(DataType::Int.promote("abc"), DataType::String);
        assert_eq!(DataType::Float.promote("n/a"), DataType::String);
    }

    #[test]
    fn test_promote_never_narrows() {
        // Once a column has widened to Float, an integer sample keeps it there
        assert_eq!(DataType::Float.promote("7"), DataType::Float);
    }

    #[test]
    fn test_datetime_text_infers_as_string() {
        assert_eq!(DataType::Int.promote("2019-01-15 03:05:00"), DataType::String);
    }

    #[test]
    fn test_empty_value_keeps_type() {
        assert_eq!(DataType::Int.promote(""), DataType::Int);
    }

    #[test]
    fn test_get_value_typed() {
        assert_eq!(DataType::Int.get_value("7"), Some(Value::Int(7)));
        assert_eq!(DataType::Float.get_value("1.5"), Some(Value::Float(1.5)));
        assert_eq!(DataType::Int.get_value(""), None);
        assert_eq!(
            DataType::String.get_value("x"),
            Some(Value::String("x".to_string()))
        );
    }
}
