use model::core::{utils::escape_csv_string, value::Value};

/// Encodes values into the CSV dialect expected by COPY ... FROM STDIN.
pub struct PgCopyValueEncoder;

impl PgCopyValueEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode_value(&self, value: &Value) -> String {
        match value {
            Value::Null => self.encode_null(),
            Value::String(s) => escape_csv_string(s),
            Value::Boolean(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => ryu::Buffer::new().format(*v).to_string(),
            Value::Date(d) => d.to_string(),
            Value::Timestamp(ts) => ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
        }
    }

    pub fn encode_null(&self) -> String {
        "\\N".to_string()
    }
}

impl Default for PgCopyValueEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    #[test]
    fn test_encode_scalars() {
        let encoder = PgCopyValueEncoder::new();
        assert_eq!(encoder.encode_value(&Value::Int(42)), "42");
        assert_eq!(encoder.encode_value(&Value::Float(1.5)), "1.5");
        assert_eq!(encoder.encode_value(&Value::Boolean(true)), "true");
        assert_eq!(encoder.encode_value(&Value::Null), "\\N");
    }

    #[test]
    fn test_encode_string_is_quoted() {
        let encoder = PgCopyValueEncoder::new();
        assert_eq!(
            encoder.encode_value(&Value::String("a,b".to_string())),
            "\"a,b\""
        );
    }

    #[test]
    fn test_encode_timestamp() {
        let encoder = PgCopyValueEncoder::new();
        let ts: NaiveDateTime = NaiveDate::from_ymd_opt(2019, 1, 15)
            .unwrap()
            .and_hms_opt(3, 5, 0)
            .unwrap();
        assert_eq!(
            encoder.encode_value(&Value::Timestamp(ts)),
            "2019-01-15 03:05:00.000000"
        );
    }
}
