//! Stable identifiers for rule kinds.
//!
//! A rule kind is the `rule.type` discriminator of a rule definition file. Kinds are snake_case
//! and never renamed once published.

pub const KIND_REQUIRED_FIELD: &str = "required_field";
pub const KIND_REQUIRED_FIELDS: &str = "required_fields";
pub const KIND_FIELD_TYPE: &str = "field_type";
pub const KIND_VALUE_RANGE: &str = "value_range";
pub const KIND_ARRAY_ITEM_REQUIRED_FIELDS: &str = "array_item_required_fields";
pub const KIND_ARRAY_ITEM_FIELD: &str = "array_item_field";
pub const KIND_PATTERN_MATCH: &str = "pattern_match";
pub const KIND_ARRAY_NO_DUPLICATES: &str = "array_no_duplicates";
pub const KIND_ARRAY_NO_DUPLICATES_COMBINE: &str = "array_no_duplicates_combine";
pub const KIND_NESTED_ARRAY_NO_DUPLICATES: &str = "nested_array_no_duplicates";
pub const KIND_NESTED_ARRAY_ITEM_REQUIRED_FIELDS: &str = "nested_array_item_required_fields";
pub const KIND_NESTED_ARRAY_ITEM_FIELD: &str = "nested_array_item_field";
pub const KIND_HASHED_VALUE_CHECK: &str = "hashed_value_check";
pub const KIND_CONTAINS_KEYWORDS: &str = "contains_keywords";
pub const KIND_NO_TRAILING_WHITESPACE: &str = "no_trailing_whitespace";

/// Every rule kind, in catalog order.
pub const ALL_KINDS: &[&str] = &[
    KIND_REQUIRED_FIELD,
    KIND_REQUIRED_FIELDS,
    KIND_FIELD_TYPE,
    KIND_VALUE_RANGE,
    KIND_ARRAY_ITEM_REQUIRED_FIELDS,
    KIND_ARRAY_ITEM_FIELD,
    KIND_PATTERN_MATCH,
    KIND_ARRAY_NO_DUPLICATES,
    KIND_ARRAY_NO_DUPLICATES_COMBINE,
    KIND_NESTED_ARRAY_NO_DUPLICATES,
    KIND_NESTED_ARRAY_ITEM_REQUIRED_FIELDS,
    KIND_NESTED_ARRAY_ITEM_FIELD,
    KIND_HASHED_VALUE_CHECK,
    KIND_CONTAINS_KEYWORDS,
    KIND_NO_TRAILING_WHITESPACE,
];

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const RULE_NAME_TOOL_RUNTIME: &str = "confguard runtime";
