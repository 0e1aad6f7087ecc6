//! Typed parameter records per rule kind.
//!
//! Each kind has one decode function that checks presence and type of every expected parameter.
//! String and list parameters must be non-empty. Values that a check validates itself (regex
//! syntax, hash algorithm) are kept as strings.

use crate::model::FieldType;
use crate::policy::{ParamValue, RawParams, RuleKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("missing parameter `{0}`")]
    Missing(&'static str),
    #[error("parameter `{0}` must not be empty")]
    Empty(&'static str),
    #[error("parameter `{name}` must be {expected}, got {found}")]
    WrongType {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("parameter `{name}` has invalid value `{value}` (expected {expected})")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RequiredFieldParams {
    pub path: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RequiredFieldsParams {
    pub path: String,
    pub fields: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldTypeParams {
    pub path: String,
    pub expected_type: FieldType,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueRangeParams {
    pub path: String,
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayItemRequiredFieldsParams {
    pub path: String,
    pub required_fields: Vec<String>,
}

/// `validation: {type: enum, allowed_values: [...]}`; enum is the only validation type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValidation {
    pub allowed_values: Vec<String>,
}

impl EnumValidation {
    pub fn allows(&self, value: &str) -> bool {
        self.allowed_values.iter().any(|v| v == value)
    }

    /// `one of [a, b]`
    pub fn describe(&self) -> String {
        format!("one of [{}]", self.allowed_values.join(", "))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayItemFieldParams {
    pub path: String,
    pub field: String,
    pub validation: EnumValidation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PatternMatchParams {
    pub path: String,
    pub pattern: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayNoDuplicatesParams {
    pub path: String,
    pub field: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayNoDuplicatesCombineParams {
    pub path: String,
    pub fields: Vec<String>,
}

/// Key of a nested duplicate check: one field, or a combination.
#[derive(Clone, Debug, PartialEq)]
pub enum DuplicateKey {
    Field(String),
    Fields(Vec<String>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NestedArrayNoDuplicatesParams {
    pub parent_path: String,
    pub child_path: String,
    pub key: DuplicateKey,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NestedArrayItemRequiredFieldsParams {
    pub parent_path: String,
    pub child_path: String,
    pub required_fields: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NestedArrayItemFieldParams {
    pub parent_path: String,
    pub child_path: String,
    pub field: String,
    pub validation: EnumValidation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashMode {
    Forbidden,
    Allowed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HashedValueCheckParams {
    pub path: String,
    /// Lowercased algorithm name.
    pub hash_algorithm: String,
    pub mode: HashMode,
    pub hash_list: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordMode {
    Forbidden,
    Required,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContainsKeywordsParams {
    pub path: String,
    pub mode: KeywordMode,
    pub case_sensitive: bool,
    pub keywords: Vec<String>,
}

/// Decoded parameters, one variant per rule kind.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleParams {
    RequiredField(RequiredFieldParams),
    RequiredFields(RequiredFieldsParams),
    FieldType(FieldTypeParams),
    ValueRange(ValueRangeParams),
    ArrayItemRequiredFields(ArrayItemRequiredFieldsParams),
    ArrayItemField(ArrayItemFieldParams),
    PatternMatch(PatternMatchParams),
    ArrayNoDuplicates(ArrayNoDuplicatesParams),
    ArrayNoDuplicatesCombine(ArrayNoDuplicatesCombineParams),
    NestedArrayNoDuplicates(NestedArrayNoDuplicatesParams),
    NestedArrayItemRequiredFields(NestedArrayItemRequiredFieldsParams),
    NestedArrayItemField(NestedArrayItemFieldParams),
    HashedValueCheck(HashedValueCheckParams),
    ContainsKeywords(ContainsKeywordsParams),
    NoTrailingWhitespace,
}

pub fn decode(kind: RuleKind, params: &RawParams) -> Result<RuleParams, DecodeError> {
    Ok(match kind {
        RuleKind::RequiredField => RuleParams::RequiredField(decode_required_field(params)?),
        RuleKind::RequiredFields => RuleParams::RequiredFields(decode_required_fields(params)?),
        RuleKind::FieldType => RuleParams::FieldType(decode_field_type(params)?),
        RuleKind::ValueRange => RuleParams::ValueRange(decode_value_range(params)?),
        RuleKind::ArrayItemRequiredFields => {
            RuleParams::ArrayItemRequiredFields(decode_array_item_required_fields(params)?)
        }
        RuleKind::ArrayItemField => RuleParams::ArrayItemField(decode_array_item_field(params)?),
        RuleKind::PatternMatch => RuleParams::PatternMatch(decode_pattern_match(params)?),
        RuleKind::ArrayNoDuplicates => {
            RuleParams::ArrayNoDuplicates(decode_array_no_duplicates(params)?)
        }
        RuleKind::ArrayNoDuplicatesCombine => {
            RuleParams::ArrayNoDuplicatesCombine(decode_array_no_duplicates_combine(params)?)
        }
        RuleKind::NestedArrayNoDuplicates => {
            RuleParams::NestedArrayNoDuplicates(decode_nested_array_no_duplicates(params)?)
        }
        RuleKind::NestedArrayItemRequiredFields => RuleParams::NestedArrayItemRequiredFields(
            decode_nested_array_item_required_fields(params)?,
        ),
        RuleKind::NestedArrayItemField => {
            RuleParams::NestedArrayItemField(decode_nested_array_item_field(params)?)
        }
        RuleKind::HashedValueCheck => {
            RuleParams::HashedValueCheck(decode_hashed_value_check(params)?)
        }
        RuleKind::ContainsKeywords => {
            RuleParams::ContainsKeywords(decode_contains_keywords(params)?)
        }
        RuleKind::NoTrailingWhitespace => RuleParams::NoTrailingWhitespace,
    })
}

pub fn decode_required_field(p: &RawParams) -> Result<RequiredFieldParams, DecodeError> {
    Ok(RequiredFieldParams {
        path: string(p, "path")?,
    })
}

pub fn decode_required_fields(p: &RawParams) -> Result<RequiredFieldsParams, DecodeError> {
    Ok(RequiredFieldsParams {
        path: string(p, "path")?,
        fields: string_list(p, "fields")?,
    })
}

pub fn decode_field_type(p: &RawParams) -> Result<FieldTypeParams, DecodeError> {
    let raw = string(p, "expected_type")?;
    let expected_type = raw
        .parse::<FieldType>()
        .map_err(|_| DecodeError::InvalidValue {
            name: "expected_type",
            value: raw.clone(),
            expected: "string, number, boolean, array or object",
        })?;
    Ok(FieldTypeParams {
        path: string(p, "path")?,
        expected_type,
    })
}

pub fn decode_value_range(p: &RawParams) -> Result<ValueRangeParams, DecodeError> {
    Ok(ValueRangeParams {
        path: string(p, "path")?,
        min: number(p, "min")?,
        max: number(p, "max")?,
    })
}

pub fn decode_array_item_required_fields(
    p: &RawParams,
) -> Result<ArrayItemRequiredFieldsParams, DecodeError> {
    Ok(ArrayItemRequiredFieldsParams {
        path: string(p, "path")?,
        required_fields: string_list(p, "required_fields")?,
    })
}

pub fn decode_array_item_field(p: &RawParams) -> Result<ArrayItemFieldParams, DecodeError> {
    Ok(ArrayItemFieldParams {
        path: string(p, "path")?,
        field: string(p, "field")?,
        validation: validation(p)?,
    })
}

pub fn decode_pattern_match(p: &RawParams) -> Result<PatternMatchParams, DecodeError> {
    Ok(PatternMatchParams {
        path: string(p, "path")?,
        pattern: string(p, "pattern")?,
    })
}

pub fn decode_array_no_duplicates(p: &RawParams) -> Result<ArrayNoDuplicatesParams, DecodeError> {
    Ok(ArrayNoDuplicatesParams {
        path: string(p, "path")?,
        field: string(p, "field")?,
    })
}

pub fn decode_array_no_duplicates_combine(
    p: &RawParams,
) -> Result<ArrayNoDuplicatesCombineParams, DecodeError> {
    Ok(ArrayNoDuplicatesCombineParams {
        path: string(p, "path")?,
        fields: string_list(p, "fields")?,
    })
}

pub fn decode_nested_array_no_duplicates(
    p: &RawParams,
) -> Result<NestedArrayNoDuplicatesParams, DecodeError> {
    let key = if p.contains_key("fields") {
        DuplicateKey::Fields(string_list(p, "fields")?)
    } else if p.contains_key("field") {
        DuplicateKey::Field(string(p, "field")?)
    } else {
        return Err(DecodeError::Missing("field or fields"));
    };
    Ok(NestedArrayNoDuplicatesParams {
        parent_path: string(p, "parent_path")?,
        child_path: string(p, "child_path")?,
        key,
    })
}

pub fn decode_nested_array_item_required_fields(
    p: &RawParams,
) -> Result<NestedArrayItemRequiredFieldsParams, DecodeError> {
    Ok(NestedArrayItemRequiredFieldsParams {
        parent_path: string(p, "parent_path")?,
        child_path: string(p, "child_path")?,
        required_fields: string_list(p, "required_fields")?,
    })
}

pub fn decode_nested_array_item_field(
    p: &RawParams,
) -> Result<NestedArrayItemFieldParams, DecodeError> {
    Ok(NestedArrayItemFieldParams {
        parent_path: string(p, "parent_path")?,
        child_path: string(p, "child_path")?,
        field: string(p, "field")?,
        validation: validation(p)?,
    })
}

pub fn decode_hashed_value_check(p: &RawParams) -> Result<HashedValueCheckParams, DecodeError> {
    let mode = match string(p, "mode")?.as_str() {
        "forbidden" => HashMode::Forbidden,
        "allowed" => HashMode::Allowed,
        other => {
            return Err(DecodeError::InvalidValue {
                name: "mode",
                value: other.to_string(),
                expected: "forbidden or allowed",
            });
        }
    };
    Ok(HashedValueCheckParams {
        path: string(p, "path")?,
        hash_algorithm: string(p, "hash_algorithm")?.to_ascii_lowercase(),
        mode,
        hash_list: string_list(p, "hash_list")?,
    })
}

pub fn decode_contains_keywords(p: &RawParams) -> Result<ContainsKeywordsParams, DecodeError> {
    let mode = match string(p, "mode")?.as_str() {
        "forbidden" => KeywordMode::Forbidden,
        "required" => KeywordMode::Required,
        other => {
            return Err(DecodeError::InvalidValue {
                name: "mode",
                value: other.to_string(),
                expected: "forbidden or required",
            });
        }
    };
    let case_sensitive = match p.get("case_sensitive") {
        None | Some(ParamValue::Null) => false,
        Some(ParamValue::Bool(b)) => *b,
        Some(other) => {
            return Err(DecodeError::WrongType {
                name: "case_sensitive",
                expected: "a boolean",
                found: other.type_name(),
            });
        }
    };
    Ok(ContainsKeywordsParams {
        path: string(p, "path")?,
        mode,
        case_sensitive,
        keywords: string_list(p, "keywords")?,
    })
}

fn required<'a>(p: &'a RawParams, name: &'static str) -> Result<&'a ParamValue, DecodeError> {
    match p.get(name) {
        None | Some(ParamValue::Null) => Err(DecodeError::Missing(name)),
        Some(v) => Ok(v),
    }
}

fn string(p: &RawParams, name: &'static str) -> Result<String, DecodeError> {
    match required(p, name)? {
        ParamValue::String(s) if s.is_empty() => Err(DecodeError::Empty(name)),
        ParamValue::String(s) => Ok(s.clone()),
        other => Err(DecodeError::WrongType {
            name,
            expected: "a string",
            found: other.type_name(),
        }),
    }
}

fn number(p: &RawParams, name: &'static str) -> Result<f64, DecodeError> {
    match required(p, name)? {
        ParamValue::Integer(i) => Ok(*i as f64),
        ParamValue::Float(f) => Ok(*f),
        other => Err(DecodeError::WrongType {
            name,
            expected: "a number",
            found: other.type_name(),
        }),
    }
}

/// Scalar list items are accepted as their text form; YAML lists of numbers are common in
/// `allowed_values`.
fn string_list(p: &RawParams, name: &'static str) -> Result<Vec<String>, DecodeError> {
    match required(p, name)? {
        ParamValue::List(items) if items.is_empty() => Err(DecodeError::Empty(name)),
        ParamValue::List(items) => items.iter().map(|item| list_item(name, item)).collect(),
        other => Err(DecodeError::WrongType {
            name,
            expected: "a list",
            found: other.type_name(),
        }),
    }
}

fn list_item(name: &'static str, item: &ParamValue) -> Result<String, DecodeError> {
    match item {
        ParamValue::String(s) => Ok(s.clone()),
        ParamValue::Integer(i) => Ok(i.to_string()),
        ParamValue::Float(f) => Ok(f.to_string()),
        ParamValue::Bool(b) => Ok(b.to_string()),
        other => Err(DecodeError::WrongType {
            name,
            expected: "a list of scalars",
            found: other.type_name(),
        }),
    }
}

fn validation(p: &RawParams) -> Result<EnumValidation, DecodeError> {
    let map = match required(p, "validation")? {
        ParamValue::Map(map) => map,
        other => {
            return Err(DecodeError::WrongType {
                name: "validation",
                expected: "a map",
                found: other.type_name(),
            });
        }
    };
    let kind = match map.get("type") {
        None | Some(ParamValue::Null) => return Err(DecodeError::Missing("validation.type")),
        Some(ParamValue::String(s)) => s.as_str(),
        Some(other) => {
            return Err(DecodeError::WrongType {
                name: "validation.type",
                expected: "a string",
                found: other.type_name(),
            });
        }
    };
    if kind != "enum" {
        return Err(DecodeError::InvalidValue {
            name: "validation.type",
            value: kind.to_string(),
            expected: "enum",
        });
    }
    Ok(EnumValidation {
        allowed_values: string_list(map, "allowed_values")
            .map_err(|err| match err {
                DecodeError::Missing(_) => DecodeError::Missing("validation.allowed_values"),
                DecodeError::Empty(_) => DecodeError::Empty("validation.allowed_values"),
                other => other,
            })?,
    })
}
