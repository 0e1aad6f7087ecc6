use super::utils::{RuleContext, existence_targets};
use crate::model::Node;
use crate::params::RequiredFieldsParams;
use crate::path;
use crate::query;
use confguard_types::Finding;

/// A missing parent is reported once, on the parent path; its fields are not listed.
pub fn run(ctx: &RuleContext<'_>, root: &Node, p: &RequiredFieldsParams, out: &mut Vec<Finding>) {
    for target in existence_targets(root, &p.path) {
        let parent = match target {
            Ok(parent) => parent,
            Err(missing) => {
                out.push(ctx.finding(missing, ctx.message()));
                continue;
            }
        };
        for field in &p.fields {
            if !query::has_field(parent.value, field) {
                out.push(ctx.finding(path::join(&parent.path, field), ctx.message()));
            }
        }
    }
}
