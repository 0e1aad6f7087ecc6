//! One module per rule kind; each exposes `run`, reads the document and appends findings.

use crate::model::Document;
use crate::params::RuleParams;
use confguard_types::Finding;

mod array_item_field;
mod array_item_required_fields;
mod array_no_duplicates;
mod array_no_duplicates_combine;
mod contains_keywords;
mod field_type;
mod hashed_value_check;
mod nested_array_item_field;
mod nested_array_item_required_fields;
mod nested_array_no_duplicates;
mod no_trailing_whitespace;
mod pattern_match;
mod required_field;
mod required_fields;
mod utils;
mod value_range;


pub use hashed_value_check::HashAlgorithm;
pub use utils::RuleContext;

pub fn run(ctx: &RuleContext<'_>, doc: &Document, params: &RuleParams, out: &mut Vec<Finding>) {
    let root = doc.root();
    match params {
        RuleParams::RequiredField(p) => required_field::run(ctx, root, p, out),
        RuleParams::RequiredFields(p) => required_fields::run(ctx, root, p, out),
        RuleParams::FieldType(p) => field_type::run(ctx, root, p, out),
        RuleParams::ValueRange(p) => value_range::run(ctx, root, p, out),
        RuleParams::ArrayItemRequiredFields(p) => {
            array_item_required_fields::run(ctx, root, p, out)
        }
        RuleParams::ArrayItemField(p) => array_item_field::run(ctx, root, p, out),
        RuleParams::PatternMatch(p) => pattern_match::run(ctx, root, p, out),
        RuleParams::ArrayNoDuplicates(p) => array_no_duplicates::run(ctx, root, p, out),
        RuleParams::ArrayNoDuplicatesCombine(p) => {
            array_no_duplicates_combine::run(ctx, root, p, out)
        }
        RuleParams::NestedArrayNoDuplicates(p) => {
            nested_array_no_duplicates::run(ctx, root, p, out)
        }
        RuleParams::NestedArrayItemRequiredFields(p) => {
            nested_array_item_required_fields::run(ctx, root, p, out)
        }
        RuleParams::NestedArrayItemField(p) => nested_array_item_field::run(ctx, root, p, out),
        RuleParams::HashedValueCheck(p) => hashed_value_check::run(ctx, root, p, out),
        RuleParams::ContainsKeywords(p) => contains_keywords::run(ctx, root, p, out),
        RuleParams::NoTrailingWhitespace => no_trailing_whitespace::run(ctx, root, out),
    }
}
