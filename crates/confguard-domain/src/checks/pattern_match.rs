use super::utils::{RuleContext, strings_at};
use crate::model::Node;
use crate::params::PatternMatchParams;
use confguard_types::Finding;
use regex::Regex;

pub fn run(ctx: &RuleContext<'_>, root: &Node, p: &PatternMatchParams, out: &mut Vec<Finding>) {
    let re = match Regex::new(&p.pattern) {
        Ok(re) => re,
        Err(err) => {
            out.push(ctx.fault(&p.path, format!("invalid regex pattern `{}`: {err}", p.pattern)));
            return;
        }
    };

    for (at, value) in strings_at(root, &p.path) {
        if !re.is_match(value) {
            out.push(ctx.finding_with_values(
                at,
                ctx.message(),
                value,
                format!("pattern: {}", p.pattern),
            ));
        }
    }
}
