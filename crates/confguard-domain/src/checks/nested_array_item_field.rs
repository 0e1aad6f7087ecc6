use super::array_item_field::check_items;
use super::utils::{RuleContext, nested_arrays};
use crate::model::Node;
use crate::params::NestedArrayItemFieldParams;
use confguard_types::Finding;

pub fn run(
    ctx: &RuleContext<'_>,
    root: &Node,
    p: &NestedArrayItemFieldParams,
    out: &mut Vec<Finding>,
) {
    for (base, items) in nested_arrays(root, &p.parent_path, &p.child_path) {
        check_items(ctx, &base, items, &p.field, &p.validation, out);
    }
}
