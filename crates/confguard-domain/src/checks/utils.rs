use crate::model::Node;
use crate::path::{self, PathExpr};
use crate::policy::Rule;
use crate::query::{self, Resolved};
use confguard_types::{Finding, RepoPath, Severity};

/// The rule being evaluated and the file it is evaluated against.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub file: &'a RepoPath,
    pub rule: &'a Rule,
}

impl<'a> RuleContext<'a> {
    pub fn new(file: &'a RepoPath, rule: &'a Rule) -> Self {
        Self { file, rule }
    }

    pub fn message(&self) -> &str {
        &self.rule.message
    }

    /// A violation at the rule's own severity.
    pub fn finding(&self, path: impl Into<String>, message: impl Into<String>) -> Finding {
        self.build(self.rule.severity, path.into(), message.into())
    }

    pub fn finding_with_values(
        &self,
        path: impl Into<String>,
        message: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) -> Finding {
        let mut finding = self.finding(path, message);
        finding.actual_value = Some(actual.into());
        finding.expected_value = Some(expected.into());
        finding
    }

    /// A configuration fault of the rule itself; always error severity.
    pub fn fault(&self, path: impl Into<String>, message: impl Into<String>) -> Finding {
        self.build(Severity::Error, path.into(), message.into())
    }

    fn build(&self, severity: Severity, path: String, message: String) -> Finding {
        Finding {
            file: self.file.clone(),
            rule_id: self.rule.id.clone(),
            rule_name: self.rule.name.clone(),
            severity,
            message,
            path,
            actual_value: None,
            expected_value: None,
        }
    }
}

/// Every sequence reached by `path`, with its concrete path.
pub fn arrays_at<'a>(node: &'a Node, path: &str) -> Vec<(String, &'a [Node])> {
    sequences(query::resolve_all(node, path))
}

/// Every sequence at `child_path` below each element of the sequences at `parent_path`.
///
/// Concrete paths read `<parent>[i].<child>`.
pub fn nested_arrays<'a>(
    node: &'a Node,
    parent_path: &str,
    child_path: &str,
) -> Vec<(String, &'a [Node])> {
    let mut out = Vec::new();
    for (parent, items) in arrays_at(node, parent_path) {
        for (i, element) in items.iter().enumerate() {
            let base = path::index(&parent, i);
            for (child, seq) in arrays_at(element, child_path) {
                out.push((path::join(&base, &child), seq));
            }
        }
    }
    out
}

/// Every string reached by `path`, with its concrete path.
pub fn strings_at<'a>(node: &'a Node, path: &str) -> Vec<(String, &'a str)> {
    query::resolve_all(node, path)
        .into_iter()
        .filter_map(|r| r.value.as_str().map(|s| (r.path, s)))
        .collect()
}

/// Targets of an existence check.
///
/// A plain path yields `Ok` when it resolves, `Err(path)` otherwise. A wildcard path is expanded
/// up to its last wildcard; each element then yields `Ok` or `Err(<element>.<remainder>)`. A
/// missing wildcard array yields nothing. A path that does not parse is reported missing as
/// written.
pub fn existence_targets<'a>(node: &'a Node, raw: &str) -> Vec<Result<Resolved<'a>, String>> {
    let Ok(expr) = PathExpr::parse(raw) else {
        tracing::debug!(path = raw, "unparseable path expression");
        return vec![Err(raw.to_string())];
    };

    let Some((head, rest)) = expr.split_at_last_wildcard() else {
        return match query::resolve_expr(node, &expr) {
            Some(value) => vec![Ok(Resolved {
                path: expr.to_string(),
                value,
            })],
            None => vec![Err(expr.to_string())],
        };
    };

    let rest_text = rest.to_string();
    query::resolve_all_expr(node, &head)
        .into_iter()
        .map(|element| {
            let concrete = path::join(&element.path, &rest_text);
            match query::resolve_expr(element.value, &rest) {
                Some(value) => Ok(Resolved {
                    path: concrete,
                    value,
                }),
                None => Err(concrete),
            }
        })
        .collect()
}

fn sequences<'a>(resolved: Vec<Resolved<'a>>) -> Vec<(String, &'a [Node])> {
    resolved
        .into_iter()
        .filter_map(|r| r.value.as_sequence().map(|seq| (r.path, seq)))
        .collect()
}
