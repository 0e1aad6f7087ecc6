use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={file},title={rule_id}::{message} (path: {path})`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let meta = format!(
            "file={},title={}",
            escape_property(&f.file),
            escape_property(&f.rule_id)
        );

        let text = if f.path.is_empty() {
            f.message.clone()
        } else {
            format!("{} (path: {})", f.message, f.path)
        };

        out.push(format!("::{} {}::{}", level, meta, escape_data(&text)));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
