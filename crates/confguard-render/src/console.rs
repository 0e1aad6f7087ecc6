use crate::{RenderableReport, RenderableSeverity};

const RULE: &str = "==================================================";

/// Human-readable terminal output: findings grouped per file, then a summary.
pub fn render_console(report: &RenderableReport) -> String {
    let mut out = String::new();

    if report.findings.is_empty() {
        out.push_str("All checks passed.\n");
        return out;
    }

    for (file, findings) in report.by_file() {
        out.push_str(&format!("{file}\n"));
        for f in findings {
            out.push_str(&format!(
                "  [{}] {} {}\n",
                f.severity.label(),
                f.rule_id,
                f.rule_name
            ));
            out.push_str(&format!("     {}\n", f.message));
            if !f.path.is_empty() {
                out.push_str(&format!("     path: {}\n", f.path));
            }
            if let Some(actual) = &f.actual_value {
                out.push_str(&format!("     actual: {actual}\n"));
            }
            if let Some(expected) = &f.expected_value {
                out.push_str(&format!("     expected: {expected}\n"));
            }
        }
        out.push('\n');
    }

    out.push_str(RULE);
    out.push('\n');
    let errors = report.count(RenderableSeverity::Error);
    let warnings = report.count(RenderableSeverity::Warning);
    let infos = report.count(RenderableSeverity::Info);
    if errors > 0 {
        out.push_str(&format!("{errors} error(s)\n"));
    }
    if warnings > 0 {
        out.push_str(&format!("{warnings} warning(s)\n"));
    }
    if infos > 0 {
        out.push_str(&format!("{infos} info\n"));
    }

    out
}
