use super::utils::{RuleContext, nested_arrays};
use super::{array_no_duplicates, array_no_duplicates_combine};
use crate::model::Node;
use crate::params::{DuplicateKey, NestedArrayNoDuplicatesParams};
use confguard_types::Finding;

/// Duplicates are detected within each child array, never across parents.
pub fn run(
    ctx: &RuleContext<'_>,
    root: &Node,
    p: &NestedArrayNoDuplicatesParams,
    out: &mut Vec<Finding>,
) {
    for (base, items) in nested_arrays(root, &p.parent_path, &p.child_path) {
        match &p.key {
            DuplicateKey::Field(field) => {
                array_no_duplicates::check_items(ctx, &base, items, field, out)
            }
            DuplicateKey::Fields(fields) => {
                array_no_duplicates_combine::check_items(ctx, &base, items, fields, out)
            }
        }
    }
}
