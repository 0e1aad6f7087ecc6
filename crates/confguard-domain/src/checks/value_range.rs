use super::utils::RuleContext;
use crate::model::Node;
use crate::params::ValueRangeParams;
use crate::query;
use confguard_types::Finding;

pub fn run(ctx: &RuleContext<'_>, root: &Node, p: &ValueRangeParams, out: &mut Vec<Finding>) {
    for resolved in query::resolve_all(root, &p.path) {
        let Some(value) = resolved.value.as_f64() else {
            continue;
        };
        if value < p.min || value > p.max {
            out.push(ctx.finding_with_values(
                resolved.path,
                ctx.message(),
                value.to_string(),
                format!("{} - {}", p.min, p.max),
            ));
        }
    }
}
