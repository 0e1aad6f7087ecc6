use super::utils::{RuleContext, arrays_at};
use crate::model::Node;
use crate::params::{ArrayItemFieldParams, EnumValidation};
use crate::path;
use confguard_types::Finding;

pub fn run(ctx: &RuleContext<'_>, root: &Node, p: &ArrayItemFieldParams, out: &mut Vec<Finding>) {
    for (base, items) in arrays_at(root, &p.path) {
        check_items(ctx, &base, items, &p.field, &p.validation, out);
    }
}

/// `field` is a direct key of each element. Elements where it is absent or not a string are
/// skipped.
pub(super) fn check_items(
    ctx: &RuleContext<'_>,
    base: &str,
    items: &[Node],
    field: &str,
    validation: &EnumValidation,
    out: &mut Vec<Finding>,
) {
    for (i, element) in items.iter().enumerate() {
        let Some(value) = element.get(field).and_then(Node::as_str) else {
            continue;
        };
        if !validation.allows(value) {
            out.push(ctx.finding_with_values(
                path::join(&path::index(base, i), field),
                ctx.message(),
                value,
                validation.describe(),
            ));
        }
    }
}
