use super::utils::{RuleContext, existence_targets};
use crate::model::Node;
use crate::params::RequiredFieldParams;
use confguard_types::Finding;

pub fn run(ctx: &RuleContext<'_>, root: &Node, p: &RequiredFieldParams, out: &mut Vec<Finding>) {
    for target in existence_targets(root, &p.path) {
        if let Err(missing) = target {
            out.push(ctx.finding(missing, ctx.message()));
        }
    }
}
