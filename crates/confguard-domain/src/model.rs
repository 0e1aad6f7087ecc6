use std::collections::BTreeMap;
use std::fmt;

use crate::query::{self, Resolved};

/// Numeric scalar, keeping integers exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One node of a parsed configuration document.
///
/// Mapping keys are always strings; the parser normalizes anything else before a node is built.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Node>),
    Mapping(BTreeMap<String, Node>),
}

impl Node {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Direct child of a mapping node.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Canonical text used for duplicate keys and messages.
    ///
    /// Strings verbatim, numbers and booleans by their display form, `null` for null and compact
    /// JSON for sequences and mappings.
    pub fn canonical_text(&self) -> String {
        match self {
            Node::Null => "null".to_string(),
            Node::Bool(b) => b.to_string(),
            Node::Number(n) => n.to_string(),
            Node::String(s) => s.clone(),
            Node::Sequence(_) | Node::Mapping(_) => self.to_json().to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(Number::Integer(i)) => Value::from(*i),
            Node::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Node::String(s) => Value::String(s.clone()),
            Node::Sequence(items) => Value::Array(items.iter().map(Node::to_json).collect()),
            Node::Mapping(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Node::Number(Number::Integer(i)),
                None => Node::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                Node::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

/// Type classification used by `field_type` rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Unknown,
}

impl FieldType {
    pub fn of(node: &Node) -> FieldType {
        match node {
            Node::String(_) => FieldType::String,
            Node::Number(_) => FieldType::Number,
            Node::Bool(_) => FieldType::Boolean,
            Node::Sequence(_) => FieldType::Array,
            Node::Mapping(_) => FieldType::Object,
            Node::Null => FieldType::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
            FieldType::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(FieldType::String),
            "number" => Ok(FieldType::Number),
            "boolean" => Ok(FieldType::Boolean),
            "array" => Ok(FieldType::Array),
            "object" => Ok(FieldType::Object),
            other => Err(format!("unknown field type: {other}")),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully parsed configuration file.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn resolve(&self, path: &str) -> Option<&Node> {
        query::resolve(&self.root, path)
    }

    pub fn resolve_all(&self, path: &str) -> Vec<Resolved<'_>> {
        query::resolve_all(&self.root, path)
    }

    pub fn has_field(&self, path: &str) -> bool {
        query::has_field(&self.root, path)
    }

    pub fn get_string(&self, path: &str) -> Option<&str> {
        query::get_string(&self.root, path)
    }

    pub fn get_number(&self, path: &str) -> Option<f64> {
        query::get_number(&self.root, path)
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        query::get_bool(&self.root, path)
    }

    pub fn get_array(&self, path: &str) -> Option<&[Node]> {
        query::get_array(&self.root, path)
    }

    pub fn get_mapping(&self, path: &str) -> Option<&BTreeMap<String, Node>> {
        query::get_mapping(&self.root, path)
    }

    pub fn get_type(&self, path: &str) -> FieldType {
        query::get_type(&self.root, path)
    }
}

impl From<Node> for Document {
    fn from(root: Node) -> Self {
        Document::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_numbers_keep_integers_exact() {
        let node = Node::from(json!({"a": 3, "b": 2.5}));
        assert_eq!(node.get("a"), Some(&Node::Number(Number::Integer(3))));
        assert_eq!(node.get("b"), Some(&Node::Number(Number::Float(2.5))));
    }

    #[test]
    fn canonical_text_forms() {
        assert_eq!(Node::from(json!("x")).canonical_text(), "x");
        assert_eq!(Node::from(json!(7)).canonical_text(), "7");
        assert_eq!(Node::from(json!(1.5)).canonical_text(), "1.5");
        assert_eq!(Node::from(json!(true)).canonical_text(), "true");
        assert_eq!(Node::Null.canonical_text(), "null");
        assert_eq!(Node::from(json!({"k": [1, "a"]})).canonical_text(), r#"{"k":[1,"a"]}"#);
    }

    #[test]
    fn field_type_classification() {
        assert_eq!(FieldType::of(&Node::from(json!("s"))), FieldType::String);
        assert_eq!(FieldType::of(&Node::from(json!(1))), FieldType::Number);
        assert_eq!(FieldType::of(&Node::from(json!(false))), FieldType::Boolean);
        assert_eq!(FieldType::of(&Node::from(json!([]))), FieldType::Array);
        assert_eq!(FieldType::of(&Node::from(json!({}))), FieldType::Object);
        assert_eq!(FieldType::of(&Node::Null), FieldType::Unknown);
        assert!("unknown".parse::<FieldType>().is_err());
    }
}
