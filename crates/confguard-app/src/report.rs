use anyhow::{Context, bail};
use confguard_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use confguard_types::{
    ConfguardData, ConfguardReport, Finding, RepoPath, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    Verdict, ids,
};
use time::OffsetDateTime;

use crate::check::tool_meta;

pub fn parse_report_json(text: &str) -> anyhow::Result<ConfguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse confguard report")
}

pub fn serialize_report(report: &ConfguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &ConfguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            files_scanned: report.data.files_scanned,
            files_skipped: report.data.files_skipped,
            rules_loaded: report.data.rules_loaded,
            findings_total: report.data.findings_total,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        file: f.file.as_str().to_string(),
        rule_id: f.rule_id.clone(),
        rule_name: f.rule_name.clone(),
        message: f.message.clone(),
        path: f.path.clone(),
        actual_value: f.actual_value.clone(),
        expected_value: f.expected_value.clone(),
    }
}

/// A failing report carrying one error finding that describes a tool failure.
pub fn runtime_error_report(message: &str) -> ConfguardReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            file: RepoPath::default(),
            rule_id: ids::RULE_TOOL_RUNTIME.to_string(),
            rule_name: ids::RULE_NAME_TOOL_RUNTIME.to_string(),
            severity: Severity::Error,
            message: message.to_string(),
            path: String::new(),
            actual_value: None,
            expected_value: None,
        }],
        data: ConfguardData {
            findings_total: 1,
            ..ConfguardData::default()
        },
    }
}
