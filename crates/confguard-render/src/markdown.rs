use crate::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Confguard report\n\n");
    out.push_str(&format!(
        "- Verdict: **{}**\n- Files: {} scanned / {} skipped\n- Rules loaded: {}\n- Findings: {}\n\n",
        report.verdict.label(),
        report.data.files_scanned,
        report.data.files_skipped,
        report.data.rules_loaded,
        report.data.findings_total
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n");

    for (file, findings) in report.by_file() {
        out.push_str(&format!("\n### `{file}`\n\n"));
        for f in findings {
            out.push_str(&format!(
                "- [{}] `{}` {}: {}",
                f.severity.label(),
                f.rule_id,
                f.rule_name,
                f.message
            ));
            if !f.path.is_empty() {
                out.push_str(&format!(" (`{}`)", f.path));
            }
            out.push('\n');
            if let Some(actual) = &f.actual_value {
                out.push_str(&format!("  - actual: `{actual}`\n"));
            }
            if let Some(expected) = &f.expected_value {
                out.push_str(&format!("  - expected: `{expected}`\n"));
            }
        }
    }

    out
}
