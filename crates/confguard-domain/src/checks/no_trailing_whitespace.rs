use super::utils::RuleContext;
use crate::model::Node;
use crate::path;
use confguard_types::Finding;

/// Scans every string leaf of the document. Mapping keys are visited in sorted order.
pub fn run(ctx: &RuleContext<'_>, root: &Node, out: &mut Vec<Finding>) {
    let mut stack: Vec<(String, &Node)> = vec![(String::new(), root)];
    while let Some((at, node)) = stack.pop() {
        match node {
            Node::Mapping(map) => {
                for (key, child) in map.iter().rev() {
                    stack.push((path::join(&at, key), child));
                }
            }
            Node::Sequence(items) => {
                for (i, child) in items.iter().enumerate().rev() {
                    stack.push((path::index(&at, i), child));
                }
            }
            Node::String(s) => {
                if let Some(side) = whitespace_side(s) {
                    out.push(ctx.finding(at, format!("{} ({side})", ctx.message())));
                }
            }
            _ => {}
        }
    }
}

fn whitespace_side(value: &str) -> Option<&'static str> {
    let leading = value.starts_with(char::is_whitespace);
    let trailing = value.ends_with(char::is_whitespace);
    match (leading, trailing) {
        (true, true) => Some("leading and trailing whitespace"),
        (true, false) => Some("leading whitespace"),
        (false, true) => Some("trailing whitespace"),
        (false, false) => None,
    }
}
