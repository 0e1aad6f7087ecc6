use crate::checks::{self, RuleContext};
use crate::model::Document;
use crate::params;
use crate::policy::{Rule, RuleKind};
use crate::report::{DomainReport, SeverityCounts};
use confguard_types::{Finding, RepoPath, Severity, Verdict};

/// Findings of one validated file, in rule order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOutcome {
    pub file: RepoPath,
    pub findings: Vec<Finding>,
}

/// Run every rule against one document.
///
/// An unrecognized kind or undecodable parameters produce a single error finding for that rule;
/// the remaining rules still run.
pub fn evaluate_document<'r>(
    doc: &Document,
    file: &RepoPath,
    rules: impl IntoIterator<Item = &'r Rule>,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for rule in rules {
        let ctx = RuleContext::new(file, rule);
        let before = findings.len();

        let kind = match rule.kind.parse::<RuleKind>() {
            Ok(kind) => kind,
            Err(message) => {
                tracing::debug!(rule = %rule.id, kind = %rule.kind, "unsupported rule kind");
                findings.push(ctx.fault("", message));
                continue;
            }
        };

        match params::decode(kind, &rule.params) {
            Ok(decoded) => checks::run(&ctx, doc, &decoded, &mut findings),
            Err(err) => {
                tracing::debug!(rule = %rule.id, %kind, error = %err, "rule parameters failed to decode");
                findings.push(ctx.fault("", format!("invalid parameters for {kind}: {err}")));
            }
        }

        tracing::trace!(
            file = %file,
            rule = %rule.id,
            findings = findings.len() - before,
            "rule evaluated"
        );
    }

    findings
}

/// Aggregate per-file outcomes into one report, keeping file and finding order.
pub fn evaluate(outcomes: Vec<FileOutcome>) -> DomainReport {
    let files_scanned = outcomes.len() as u32;
    let findings: Vec<Finding> = outcomes.into_iter().flat_map(|o| o.findings).collect();

    DomainReport {
        verdict: compute_verdict(&findings),
        counts: SeverityCounts::from_findings(&findings),
        files_scanned,
        findings,
    }
}

/// `fail` on any error, `warn` on any warning, `pass` otherwise. Info never affects the verdict.
pub fn compute_verdict(findings: &[Finding]) -> Verdict {
    if findings.iter().any(|f| f.severity == Severity::Error) {
        return Verdict::Fail;
    }
    if findings.iter().any(|f| f.severity == Severity::Warning) {
        return Verdict::Warn;
    }
    Verdict::Pass
}
