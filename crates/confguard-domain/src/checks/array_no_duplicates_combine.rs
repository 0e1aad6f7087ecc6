use super::utils::{RuleContext, arrays_at};
use crate::duplicates::find_duplicates;
use crate::model::Node;
use crate::params::ArrayNoDuplicatesCombineParams;
use crate::path;
use confguard_types::Finding;

pub fn run(
    ctx: &RuleContext<'_>,
    root: &Node,
    p: &ArrayNoDuplicatesCombineParams,
    out: &mut Vec<Finding>,
) {
    for (base, items) in arrays_at(root, &p.path) {
        check_items(ctx, &base, items, &p.fields, out);
    }
}

/// One finding per duplicated element, at the element itself.
pub(super) fn check_items(
    ctx: &RuleContext<'_>,
    base: &str,
    items: &[Node],
    fields: &[String],
    out: &mut Vec<Finding>,
) {
    for group in find_duplicates(items, fields) {
        let message = format!(
            "{} (duplicate combination: {})",
            ctx.message(),
            group.derived_value
        );
        for i in group.indices {
            out.push(ctx.finding(path::index(base, i), message.clone()));
        }
    }
}
