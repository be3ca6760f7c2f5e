/// Escape a field per PostgreSQL COPY CSV rules:
/// - field is wrapped in double quotes
/// - internal `"` becomes `""`
/// - commas, newlines, tabs are safe because quoting protects them
pub fn escape_csv_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');

    for ch in s.chars() {
        if ch == '"' {
            out.push('"'); // double the quote
        }
        out.push(ch);
    }

    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_string() {
        assert_eq!(escape_csv_string("abc"), "\"abc\"");
    }

    #[test]
    fn test_escape_embedded_quotes() {
        assert_eq!(escape_csv_string("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_escape_comma_and_newline() {
        assert_eq!(escape_csv_string("a,b\nc"), "\"a,b\nc\"");
    }
}
