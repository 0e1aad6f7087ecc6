use super::utils::{RuleContext, arrays_at};
use crate::duplicates::find_duplicates;
use crate::model::Node;
use crate::params::ArrayNoDuplicatesParams;
use crate::path;
use confguard_types::Finding;

pub fn run(
    ctx: &RuleContext<'_>,
    root: &Node,
    p: &ArrayNoDuplicatesParams,
    out: &mut Vec<Finding>,
) {
    for (base, items) in arrays_at(root, &p.path) {
        check_items(ctx, &base, items, &p.field, out);
    }
}

/// One finding per duplicated element, at `<base>[i].<field>`.
pub(super) fn check_items(
    ctx: &RuleContext<'_>,
    base: &str,
    items: &[Node],
    field: &str,
    out: &mut Vec<Finding>,
) {
    for group in find_duplicates(items, &[field]) {
        let message = format!("{} (duplicate value: {})", ctx.message(), group.derived_value);
        for i in group.indices {
            let at = path::join(&path::index(base, i), field);
            out.push(ctx.finding(at, message.clone()));
        }
    }
}
