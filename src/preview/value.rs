//! Canonical JSON value model for the preview renderer.
//!
//! Parsing itself is delegated to `serde_json` (built with `preserve_order`
//! so object members keep document order); the renderer only ever sees this
//! crate's [`Value`], which has a genuine boolean variant — no sentinel
//! substitution is needed upstream.

/// A parsed JSON value, immutable for the lifetime of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// Members in document order; rendering order is decided separately by
    /// the key-sort policy.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Whether this value nests further (object or array).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// Parse JSON text into a value tree.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let parsed: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from(parsed))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or_default()),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_member_order() {
        let value = Value::parse(r#"{"zebra": 1, "alpha": 2, "middle": 3}"#).unwrap();
        let Value::Object(members) = value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = members.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zebra", "alpha", "middle"]);
    }

    #[test]
    fn test_parse_scalar_fragment() {
        assert_eq!(Value::parse("42").unwrap(), Value::Number(42.0));
        assert_eq!(Value::parse("true").unwrap(), Value::Bool(true));
        assert_eq!(Value::parse("null").unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(Value::parse("not valid json {").is_err());
    }

    #[test]
    fn test_is_container() {
        assert!(Value::Object(vec![]).is_container());
        assert!(Value::Array(vec![]).is_container());
        assert!(!Value::Number(1.0).is_container());
        assert!(!Value::Null.is_container());
    }
}
