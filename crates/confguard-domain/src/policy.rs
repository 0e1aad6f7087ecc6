use confguard_types::{Severity, ids};
use std::collections::BTreeMap;
use std::fmt;

/// Untyped rule parameter, as it came out of the rule file.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ParamValue>),
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Null => "null",
            ParamValue::Bool(_) => "boolean",
            ParamValue::Integer(_) => "integer",
            ParamValue::Float(_) => "float",
            ParamValue::String(_) => "string",
            ParamValue::List(_) => "list",
            ParamValue::Map(_) => "map",
        }
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => ParamValue::Null,
            Value::Bool(b) => ParamValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ParamValue::Integer(i),
                None => ParamValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ParamValue::String(s),
            Value::Array(items) => {
                ParamValue::List(items.into_iter().map(ParamValue::from).collect())
            }
            Value::Object(map) => ParamValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, ParamValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Kind-specific parameters of a rule, keyed by parameter name.
pub type RawParams = BTreeMap<String, ParamValue>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    RequiredField,
    RequiredFields,
    FieldType,
    ValueRange,
    ArrayItemRequiredFields,
    ArrayItemField,
    PatternMatch,
    ArrayNoDuplicates,
    ArrayNoDuplicatesCombine,
    NestedArrayNoDuplicates,
    NestedArrayItemRequiredFields,
    NestedArrayItemField,
    HashedValueCheck,
    ContainsKeywords,
    NoTrailingWhitespace,
}

impl RuleKind {
    pub const ALL: [RuleKind; 15] = [
        RuleKind::RequiredField,
        RuleKind::RequiredFields,
        RuleKind::FieldType,
        RuleKind::ValueRange,
        RuleKind::ArrayItemRequiredFields,
        RuleKind::ArrayItemField,
        RuleKind::PatternMatch,
        RuleKind::ArrayNoDuplicates,
        RuleKind::ArrayNoDuplicatesCombine,
        RuleKind::NestedArrayNoDuplicates,
        RuleKind::NestedArrayItemRequiredFields,
        RuleKind::NestedArrayItemField,
        RuleKind::HashedValueCheck,
        RuleKind::ContainsKeywords,
        RuleKind::NoTrailingWhitespace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::RequiredField => ids::KIND_REQUIRED_FIELD,
            RuleKind::RequiredFields => ids::KIND_REQUIRED_FIELDS,
            RuleKind::FieldType => ids::KIND_FIELD_TYPE,
            RuleKind::ValueRange => ids::KIND_VALUE_RANGE,
            RuleKind::ArrayItemRequiredFields => ids::KIND_ARRAY_ITEM_REQUIRED_FIELDS,
            RuleKind::ArrayItemField => ids::KIND_ARRAY_ITEM_FIELD,
            RuleKind::PatternMatch => ids::KIND_PATTERN_MATCH,
            RuleKind::ArrayNoDuplicates => ids::KIND_ARRAY_NO_DUPLICATES,
            RuleKind::ArrayNoDuplicatesCombine => ids::KIND_ARRAY_NO_DUPLICATES_COMBINE,
            RuleKind::NestedArrayNoDuplicates => ids::KIND_NESTED_ARRAY_NO_DUPLICATES,
            RuleKind::NestedArrayItemRequiredFields => ids::KIND_NESTED_ARRAY_ITEM_REQUIRED_FIELDS,
            RuleKind::NestedArrayItemField => ids::KIND_NESTED_ARRAY_ITEM_FIELD,
            RuleKind::HashedValueCheck => ids::KIND_HASHED_VALUE_CHECK,
            RuleKind::ContainsKeywords => ids::KIND_CONTAINS_KEYWORDS,
            RuleKind::NoTrailingWhitespace => ids::KIND_NO_TRAILING_WHITESPACE,
        }
    }
}

impl std::str::FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unsupported rule kind: {s}"))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One loaded policy rule.
///
/// `kind` stays a string so an unrecognized kind reaches the engine and becomes a finding.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub severity: Severity,
    pub description: Option<String>,
    pub file_patterns: Vec<String>,
    pub kind: String,
    pub params: RawParams,
    pub message: String,
}
