//! Output formatting

use abikit::Token;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Output builder for formatted CLI output
pub struct Output {
    json_mode: bool,
    fields: HashMap<String, Value>,
    message: Option<String>,
}

impl Output {
    /// Create a new output builder
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            fields: HashMap::new(),
            message: None,
        }
    }

    /// Add a string field to the output
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a u64 field to the output
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), Value::Number(value.into()));
        self
    }

    /// Add a JSON value field to the output
    pub fn field_value(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Set the human-readable message
    pub fn message(mut self, msg: &str) -> Self {
        self.message = Some(msg.to_string());
        self
    }

    /// Print the output
    pub fn print(self) {
        if self.json_mode {
            let json = json!(self.fields);
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        } else if let Some(msg) = self.message {
            println!("{}", msg);
        }
    }
}

/// JSON form of a decoded value. Integers are decimal strings.
pub fn token_to_json(token: &Token) -> Value {
    match token {
        Token::Bool(b) => Value::Bool(*b),
        Token::Array(items) | Token::FixedArray(items) => {
            Value::Array(items.iter().map(token_to_json).collect())
        }
        other => Value::String(other.to_string()),
    }
}

/// One `index: value` line per decoded value
pub fn format_values(values: &[Token]) -> String {
    if values.is_empty() {
        return "(no values)".to_string();
    }
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{}: {}", i, v))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_to_json() {
        assert_eq!(token_to_json(&Token::uint(42)), json!("42"));
        assert_eq!(token_to_json(&Token::int(-3)), json!("-3"));
        assert_eq!(token_to_json(&Token::Bool(true)), json!(true));
        assert_eq!(token_to_json(&Token::Bytes(vec![0xab])), json!("0xab"));
        assert_eq!(
            token_to_json(&Token::Array(vec![Token::uint(1), Token::uint(2)])),
            json!(["1", "2"])
        );
    }

    #[test]
    fn test_format_values() {
        assert_eq!(
            format_values(&[Token::uint(1), Token::string("a")]),
            "0: 1\n1: a"
        );
        assert_eq!(format_values(&[]), "(no values)");
    }
}
