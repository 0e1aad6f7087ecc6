//! The `check` use case: discover targets, load rules, evaluate, produce a report.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use confguard_domain::FileOutcome;
use confguard_repo::ProductsFile;
use confguard_settings::RuleSet;
use confguard_types::{
    ConfguardData, ConfguardReport, RepoPath, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use time::OffsetDateTime;

/// Product name reported when a single rules directory is used.
pub const DEFAULT_PRODUCT: &str = "default";

/// Where the rules for each target file come from.
#[derive(Clone, Copy, Debug)]
pub enum RuleSource<'a> {
    /// Detect each file's product from a `products.yaml` catalog.
    Products(&'a Utf8Path),
    /// Validate every file against one rules directory.
    RulesDir(&'a Utf8Path),
}

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Files and directories to validate.
    pub paths: &'a [Utf8PathBuf],
    pub source: RuleSource<'a>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: ConfguardReport,
}

impl CheckOutput {
    /// Rule count per product that validated at least one file, by product name.
    pub fn product_rule_counts(&self) -> &BTreeMap<String, u32> {
        &self.report.data.products
    }
}

/// Run the check use case.
///
/// Files whose product cannot be detected are skipped. Unreadable or malformed targets and
/// rule loading failures abort the run.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let files = confguard_repo::discover_config_files(input.paths)?;

    let mut resolver = RuleResolver::new(input.source)?;
    let mut assigned: Vec<(Utf8PathBuf, Arc<RuleSet>)> = Vec::with_capacity(files.len());
    let mut files_skipped = 0u32;
    for file in files {
        match resolver.rules_for(&file)? {
            Some(set) => assigned.push((file, set)),
            None => {
                tracing::warn!(file = %file, "cannot detect product, skipping");
                files_skipped += 1;
            }
        }
    }

    let outcomes = assigned
        .par_iter()
        .map(|(path, set)| validate_file(path, set))
        .collect::<anyhow::Result<Vec<FileOutcome>>>()?;

    let domain = confguard_domain::evaluate(outcomes);
    let products = resolver.loaded;
    let rules_loaded: u32 = products.values().sum();

    tracing::info!(
        files = domain.files_scanned,
        skipped = files_skipped,
        errors = domain.counts.error,
        warnings = domain.counts.warning,
        "check finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain.verdict,
        data: ConfguardData {
            files_scanned: domain.files_scanned,
            files_skipped,
            rules_loaded,
            findings_total: domain.findings.len() as u32,
            products,
        },
        findings: domain.findings,
    };

    Ok(CheckOutput { report })
}

fn validate_file(path: &Utf8Path, set: &RuleSet) -> anyhow::Result<FileOutcome> {
    let doc = confguard_repo::read_document(path)?;
    let file = RepoPath::from(path);
    let rules = set.rules_for(path.as_str());
    tracing::debug!(file = %file, rules = rules.len(), "validating");
    let findings = confguard_domain::evaluate_document(&doc, &file, rules);
    Ok(FileOutcome { file, findings })
}

/// Loads each product's rule set once, on first use.
struct RuleResolver {
    catalog: Option<ProductsFile>,
    sets: BTreeMap<String, Arc<RuleSet>>,
    loaded: BTreeMap<String, u32>,
}

impl RuleResolver {
    fn new(source: RuleSource<'_>) -> anyhow::Result<Self> {
        let mut resolver = Self {
            catalog: None,
            sets: BTreeMap::new(),
            loaded: BTreeMap::new(),
        };
        match source {
            RuleSource::Products(path) => {
                resolver.catalog = Some(
                    confguard_repo::load_product_catalog(path)
                        .context("load product catalog")?,
                );
            }
            RuleSource::RulesDir(dir) => {
                let set = confguard_repo::load_rule_set(dir)?;
                resolver.insert(DEFAULT_PRODUCT, set);
            }
        }
        Ok(resolver)
    }

    fn rules_for(&mut self, file: &Utf8Path) -> anyhow::Result<Option<Arc<RuleSet>>> {
        let Some(catalog) = &self.catalog else {
            return Ok(self.sets.get(DEFAULT_PRODUCT).cloned());
        };
        let Some(product) = catalog.catalog.detect(file.as_str()) else {
            return Ok(None);
        };
        if let Some(set) = self.sets.get(&product.name) {
            return Ok(Some(set.clone()));
        }

        let dir = catalog.rules_dir(product);
        let name = product.name.clone();
        let set = confguard_repo::load_rule_set(&dir)
            .with_context(|| format!("load rules for product {name}"))?;
        Ok(Some(self.insert(&name, set)))
    }

    fn insert(&mut self, name: &str, set: RuleSet) -> Arc<RuleSet> {
        let set = Arc::new(set);
        self.loaded.insert(name.to_string(), set.len() as u32);
        self.sets.insert(name.to_string(), set.clone());
        set
    }
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "confguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
