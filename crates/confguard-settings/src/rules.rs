use crate::model::RuleFileV1;
use crate::patterns::{base_name, base_name_pattern, build_globset};
use anyhow::{Context, bail};
use confguard_domain::checks::HashAlgorithm;
use confguard_domain::params::{self, RuleParams};
use confguard_domain::{ParamValue, RawParams, Rule, RuleKind};
use globset::GlobSet;

/// Validate a deserialized rule file and convert it into a domain rule.
pub fn rule_from_model(file: RuleFileV1) -> anyhow::Result<Rule> {
    if file.id.trim().is_empty() {
        bail!("rule is missing `id`");
    }
    let id = file.id;
    if file.name.trim().is_empty() {
        bail!("rule {id} is missing `name`");
    }
    if file.severity.is_empty() {
        bail!("rule {id} is missing `severity`");
    }
    let severity = crate::parse_severity(&file.severity)
        .with_context(|| format!("invalid severity for rule {id}"))?;
    if file.targets.file_patterns.is_empty() {
        bail!("rule {id} is missing `targets.file_patterns`");
    }
    build_globset(
        file.targets.file_patterns.iter().map(|p| base_name_pattern(p)),
        "file pattern",
    )
    .with_context(|| format!("rule {id} has an invalid file pattern"))?;
    if file.rule.kind.is_empty() {
        bail!("rule {id} is missing `rule.type`");
    }
    if file.rule.message.trim().is_empty() {
        bail!("rule {id} is missing `rule.message`");
    }

    let kind = file
        .rule
        .kind
        .parse::<RuleKind>()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("rule {id} has an unknown type"))?;

    let params: RawParams = file
        .rule
        .params
        .into_iter()
        .map(|(k, v)| (k, ParamValue::from(v)))
        .collect();
    validate_params(kind, &params).with_context(|| format!("rule {id} is misconfigured"))?;

    Ok(Rule {
        id,
        name: file.name,
        enabled: file.enabled,
        severity,
        description: file.description,
        file_patterns: file.targets.file_patterns,
        kind: file.rule.kind,
        params,
        message: file.rule.message,
    })
}

fn validate_params(kind: RuleKind, params: &RawParams) -> anyhow::Result<()> {
    let decoded = params::decode(kind, params)
        .map_err(|err| anyhow::anyhow!("invalid parameters for {kind}: {err}"))?;
    match &decoded {
        RuleParams::PatternMatch(p) => {
            regex::Regex::new(&p.pattern)
                .with_context(|| format!("invalid regex pattern: {}", p.pattern))?;
        }
        RuleParams::HashedValueCheck(p)
            if HashAlgorithm::from_name(&p.hash_algorithm).is_none() =>
        {
            bail!(
                "unsupported hash algorithm: {} (expected sha1, sha256, sha512 or md5)",
                p.hash_algorithm
            );
        }
        _ => {}
    }
    Ok(())
}

/// The enabled rules of one rule directory, with compiled file patterns.
#[derive(Clone, Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
    matchers: Vec<GlobSet>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> anyhow::Result<Self> {
        let matchers = rules
            .iter()
            .map(|rule| {
                build_globset(
                    rule.file_patterns.iter().map(|p| base_name_pattern(p)),
                    "file pattern",
                )
                .with_context(|| format!("rule {}", rule.id))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { rules, matchers })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules whose file patterns match the base filename of `path`, in load order.
    pub fn rules_for(&self, path: &str) -> Vec<&Rule> {
        let name = base_name(path);
        self.rules
            .iter()
            .zip(&self.matchers)
            .filter(|(_, set)| set.is_match(name))
            .map(|(rule, _)| rule)
            .collect()
    }
}
