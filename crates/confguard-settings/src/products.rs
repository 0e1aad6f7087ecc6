use crate::model::ProductsConfigV1;
use crate::patterns::{base_name, build_globset};
use anyhow::{Context, bail};
use globset::GlobSet;

/// One product: a named rule directory and the files it applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub description: Option<String>,
    pub rules_dir: String,
    pub path_patterns: Vec<String>,
}

#[derive(Clone, Debug)]
struct ProductMatcher {
    full: GlobSet,
    /// Patterns with a leading `**/` removed, matched against the base filename.
    base: GlobSet,
}

impl ProductMatcher {
    fn is_match(&self, normalized: &str, name: &str) -> bool {
        self.full.is_match(normalized) || self.full.is_match(name) || self.base.is_match(name)
    }
}

/// Ordered product list; the first product with a matching pattern wins.
#[derive(Clone, Debug)]
pub struct ProductCatalog {
    products: Vec<Product>,
    matchers: Vec<ProductMatcher>,
}

impl ProductCatalog {
    pub fn new(cfg: ProductsConfigV1) -> anyhow::Result<Self> {
        let mut products = Vec::with_capacity(cfg.products.len());
        let mut matchers = Vec::with_capacity(cfg.products.len());

        for (i, p) in cfg.products.into_iter().enumerate() {
            if p.name.trim().is_empty() {
                bail!("product #{i} is missing `name`");
            }
            if p.rules_dir.trim().is_empty() {
                bail!("product {} is missing `rules_dir`", p.name);
            }
            if p.path_patterns.is_empty() {
                bail!("product {} is missing `path_patterns`", p.name);
            }
            if products.iter().any(|existing: &Product| existing.name == p.name) {
                bail!("duplicate product name: {}", p.name);
            }

            let full = build_globset(p.path_patterns.iter().map(String::as_str), "path pattern")
                .with_context(|| format!("product {}", p.name))?;
            let base = build_globset(
                p.path_patterns.iter().filter_map(|pat| pat.strip_prefix("**/")),
                "path pattern",
            )
            .with_context(|| format!("product {}", p.name))?;
            matchers.push(ProductMatcher { full, base });

            products.push(Product {
                name: p.name,
                description: p.description,
                rules_dir: p.rules_dir,
                path_patterns: p.path_patterns,
            });
        }

        Ok(Self { products, matchers })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// First product whose patterns match the full path or the base filename.
    pub fn detect(&self, path: &str) -> Option<&Product> {
        let normalized = path.replace('\\', "/");
        let name = base_name(&normalized);
        self.products
            .iter()
            .zip(&self.matchers)
            .find(|(_, m)| m.is_match(&normalized, name))
            .map(|(p, _)| p)
    }
}
