use crate::discover::walk_yaml_files;
use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use confguard_settings::{Product, ProductCatalog, RuleSet};
use std::collections::HashSet;

/// Load every enabled rule below `dir`.
///
/// Rule files are read in sorted path order; any malformed file fails the whole set.
pub fn load_rule_set(dir: &Utf8Path) -> anyhow::Result<RuleSet> {
    if !dir.is_dir() {
        bail!("rules directory does not exist: {dir}");
    }

    let mut rules = Vec::new();
    let mut ids = HashSet::new();
    let mut disabled = 0usize;

    for path in walk_yaml_files(dir)? {
        let text = std::fs::read_to_string(&path).with_context(|| format!("read {path}"))?;
        let rule = confguard_settings::parse_rule_yaml(&text)
            .with_context(|| format!("load rule file {path}"))?;
        if !rule.enabled {
            tracing::debug!(rule = %rule.id, file = %path, "rule disabled");
            disabled += 1;
            continue;
        }
        if !ids.insert(rule.id.clone()) {
            tracing::warn!(rule = %rule.id, file = %path, "duplicate rule id");
        }
        rules.push(rule);
    }

    tracing::info!(dir = %dir, loaded = rules.len(), disabled, "loaded rule set");
    RuleSet::new(rules)
}

/// A parsed `products.yaml` and the directory its relative rule directories resolve against.
#[derive(Clone, Debug)]
pub struct ProductsFile {
    pub catalog: ProductCatalog,
    pub base_dir: Utf8PathBuf,
}

impl ProductsFile {
    pub fn rules_dir(&self, product: &Product) -> Utf8PathBuf {
        let dir = Utf8Path::new(&product.rules_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.base_dir.join(dir)
        }
    }
}

pub fn load_product_catalog(path: &Utf8Path) -> anyhow::Result<ProductsFile> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let catalog = confguard_settings::parse_products_yaml(&text)
        .with_context(|| format!("parse {path}"))?;
    let base_dir = path
        .parent()
        .map(Utf8Path::to_path_buf)
        .unwrap_or_default();
    tracing::info!(file = %path, products = catalog.products().len(), "loaded product catalog");
    Ok(ProductsFile { catalog, base_dir })
}
