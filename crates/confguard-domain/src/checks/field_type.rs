use super::utils::RuleContext;
use crate::model::{FieldType, Node};
use crate::params::FieldTypeParams;
use crate::query;
use confguard_types::Finding;

pub fn run(ctx: &RuleContext<'_>, root: &Node, p: &FieldTypeParams, out: &mut Vec<Finding>) {
    for resolved in query::resolve_all(root, &p.path) {
        let actual = FieldType::of(resolved.value);
        if actual != p.expected_type {
            out.push(ctx.finding_with_values(
                resolved.path,
                ctx.message(),
                actual.as_str(),
                p.expected_type.as_str(),
            ));
        }
    }
}
