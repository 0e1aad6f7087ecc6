//! Validate YAML configuration documents against declarative rules.
//!
//! ```
//! let rule = confguard::parse_rule_yaml(r#"
//! id: API-001
//! name: Port range
//! severity: error
//! targets:
//!   file_patterns: ["*.yaml"]
//! rule:
//!   type: value_range
//!   path: server.port
//!   min: 1
//!   max: 65535
//!   message: port out of range
//! "#).unwrap();
//!
//! let findings = confguard::validate_yaml("server:\n  port: 70000\n", "api.yaml", &[rule]).unwrap();
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].actual_value.as_deref(), Some("70000"));
//! ```

#![forbid(unsafe_code)]

pub use confguard_domain::{
    Document, FieldType, Node, PathExpr, Rule, RuleKind, evaluate_document, query,
};
pub use confguard_repo::parse_document;
pub use confguard_settings::{RuleSet, parse_rule_yaml};
pub use confguard_types::{Finding, RepoPath, Severity, Verdict};

/// Parse `text` and run every rule in `rules` against it, ignoring file patterns.
pub fn validate_yaml(text: &str, file: &str, rules: &[Rule]) -> anyhow::Result<Vec<Finding>> {
    let doc = parse_document(text)?;
    Ok(evaluate_document(&doc, &RepoPath::new(file), rules))
}
