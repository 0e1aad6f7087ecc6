//! Path query engine.
//!
//! Every function accepts any node, so relative queries against a sequence element use the same
//! code as queries against a document root. Absence is never an error: a path that cannot be
//! followed, or that does not parse, yields nothing.

use std::collections::BTreeMap;

use crate::model::{FieldType, Node};
use crate::path::{self, PathExpr, Segment};

/// One value reached by a (possibly wildcard) path, with its concrete path.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<'a> {
    pub path: String,
    pub value: &'a Node,
}

fn parse_or_log(input: &str) -> Option<PathExpr> {
    match PathExpr::parse(input) {
        Ok(expr) => Some(expr),
        Err(err) => {
            tracing::debug!(path = input, error = %err, "unparseable path expression");
            None
        }
    }
}

fn step<'a>(node: &'a Node, segment: &Segment) -> Option<&'a Node> {
    match segment {
        Segment::Field(name) => node.get(name),
        Segment::Index(name, i) => node.get(name)?.as_sequence()?.get(*i),
        Segment::Wildcard(_) => None,
    }
}

/// Resolve a path without wildcards.
pub fn resolve<'a>(node: &'a Node, path: &str) -> Option<&'a Node> {
    resolve_expr(node, &parse_or_log(path)?)
}

pub fn resolve_expr<'a>(node: &'a Node, expr: &PathExpr) -> Option<&'a Node> {
    expr.segments()
        .iter()
        .try_fold(node, |current, segment| step(current, segment))
}

/// Resolve a path that may contain wildcards into every matching (concrete path, value) pair.
///
/// Results are ordered left to right with indices ascending; the first wildcard varies slowest.
pub fn resolve_all<'a>(node: &'a Node, path: &str) -> Vec<Resolved<'a>> {
    match parse_or_log(path) {
        Some(expr) => resolve_all_expr(node, &expr),
        None => Vec::new(),
    }
}

pub fn resolve_all_expr<'a>(node: &'a Node, expr: &PathExpr) -> Vec<Resolved<'a>> {
    let mut working = vec![Resolved {
        path: String::new(),
        value: node,
    }];

    for segment in expr.segments() {
        let mut next = Vec::with_capacity(working.len());
        for current in working {
            match segment {
                Segment::Wildcard(name) => {
                    let Some(items) = current.value.get(name).and_then(Node::as_sequence) else {
                        continue;
                    };
                    let base = path::join(&current.path, name);
                    next.extend(items.iter().enumerate().map(|(i, value)| Resolved {
                        path: path::index(&base, i),
                        value,
                    }));
                }
                _ => {
                    if let Some(value) = step(current.value, segment) {
                        next.push(Resolved {
                            path: path::join(&current.path, &segment.to_string()),
                            value,
                        });
                    }
                }
            }
        }
        if next.is_empty() {
            return next;
        }
        working = next;
    }

    working
}

pub fn has_field(node: &Node, path: &str) -> bool {
    resolve(node, path).is_some()
}

pub fn get_array<'a>(node: &'a Node, path: &str) -> Option<&'a [Node]> {
    resolve(node, path)?.as_sequence()
}

pub fn get_string<'a>(node: &'a Node, path: &str) -> Option<&'a str> {
    resolve(node, path)?.as_str()
}

/// Integers and floats both coerce to `f64`.
pub fn get_number(node: &Node, path: &str) -> Option<f64> {
    resolve(node, path)?.as_f64()
}

pub fn get_bool(node: &Node, path: &str) -> Option<bool> {
    resolve(node, path)?.as_bool()
}

pub fn get_mapping<'a>(node: &'a Node, path: &str) -> Option<&'a BTreeMap<String, Node>> {
    resolve(node, path)?.as_mapping()
}

/// Missing values classify as `unknown`, like null.
pub fn get_type(node: &Node, path: &str) -> FieldType {
    resolve(node, path)
        .map(FieldType::of)
        .unwrap_or(FieldType::Unknown)
}
