//! The `explain` use case: look up rule kind documentation.

use confguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the available rule kinds.
    NotFound {
        identifier: String,
        available_kinds: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_kinds: explain::all_kinds(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Parameters\n");
    out.push_str("----------\n");
    out.push_str(exp.parameters);
    out.push_str("\n\n");
    out.push_str("Example\n");
    out.push_str("-------\n\n");
    out.push_str("```yaml\n");
    out.push_str(exp.example);
    if !exp.example.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n");

    out
}

pub fn format_not_found(identifier: &str, kinds: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule kind: {}\n\n", identifier));
    out.push_str("Available rule kinds:\n");
    for kind in kinds {
        out.push_str(&format!("  - {}\n", kind));
    }

    out
}
