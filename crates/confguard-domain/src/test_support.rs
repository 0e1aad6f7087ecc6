use crate::engine::evaluate_document;
use crate::model::{Document, Node};
use crate::policy::{ParamValue, RawParams, Rule};
use confguard_types::{Finding, RepoPath, Severity};
use serde_json::Value;

pub const TEST_MESSAGE: &str = "violation";

pub fn doc(value: Value) -> Document {
    Document::new(Node::from(value))
}

pub fn params(value: Value) -> RawParams {
    match ParamValue::from(value) {
        ParamValue::Map(map) => map,
        other => panic!("params must be a JSON object, got {other:?}"),
    }
}

pub fn rule(id: &str, kind: &str, raw: Value) -> Rule {
    Rule {
        id: id.to_string(),
        name: format!("{id} name"),
        enabled: true,
        severity: Severity::Warning,
        description: None,
        file_patterns: vec!["*.yaml".to_string()],
        kind: kind.to_string(),
        params: params(raw),
        message: TEST_MESSAGE.to_string(),
    }
}

/// Evaluate a single rule of `kind` against `document`.
pub fn run(document: &Document, kind: &str, raw: Value) -> Vec<Finding> {
    let r = rule("T-001", kind, raw);
    evaluate_document(document, &RepoPath::new("config.yaml"), [&r])
}

pub fn paths(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.path.as_str()).collect()
}

pub fn finding_with(severity: Severity) -> Finding {
    Finding {
        file: RepoPath::new("config.yaml"),
        rule_id: "T-001".to_string(),
        rule_name: "T-001 name".to_string(),
        severity,
        message: TEST_MESSAGE.to_string(),
        path: String::new(),
        actual_value: None,
        expected_value: None,
    }
}
