#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

impl RenderableSeverity {
    pub(crate) fn label(self) -> &'static str {
        match self {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

impl RenderableVerdictStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            RenderableVerdictStatus::Pass => "PASS",
            RenderableVerdictStatus::Warn => "WARN",
            RenderableVerdictStatus::Fail => "FAIL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub file: String,
    pub rule_id: String,
    pub rule_name: String,
    pub message: String,
    /// Empty for file-level findings.
    pub path: String,
    pub actual_value: Option<String>,
    pub expected_value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub files_scanned: u32,
    pub files_skipped: u32,
    pub rules_loaded: u32,
    pub findings_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

impl RenderableReport {
    pub(crate) fn count(&self, severity: RenderableSeverity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// Findings grouped by file, files in sorted order, findings in report order.
    pub(crate) fn by_file(&self) -> Vec<(&str, Vec<&RenderableFinding>)> {
        let mut groups: std::collections::BTreeMap<&str, Vec<&RenderableFinding>> =
            std::collections::BTreeMap::new();
        for f in &self.findings {
            groups.entry(f.file.as_str()).or_default().push(f);
        }
        groups.into_iter().collect()
    }
}
