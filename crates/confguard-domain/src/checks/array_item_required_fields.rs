use super::utils::{RuleContext, arrays_at};
use crate::model::Node;
use crate::params::ArrayItemRequiredFieldsParams;
use crate::path;
use confguard_types::Finding;

pub fn run(
    ctx: &RuleContext<'_>,
    root: &Node,
    p: &ArrayItemRequiredFieldsParams,
    out: &mut Vec<Finding>,
) {
    for (base, items) in arrays_at(root, &p.path) {
        check_items(ctx, &base, items, &p.required_fields, out);
    }
}

/// Fields are direct keys of each element. Non-mapping elements are skipped.
pub(super) fn check_items(
    ctx: &RuleContext<'_>,
    base: &str,
    items: &[Node],
    required_fields: &[String],
    out: &mut Vec<Finding>,
) {
    for (i, element) in items.iter().enumerate() {
        if element.as_mapping().is_none() {
            continue;
        }
        for field in required_fields {
            if element.get(field).is_none() {
                let at = path::join(&path::index(base, i), field);
                out.push(ctx.finding(at, ctx.message()));
            }
        }
    }
}
