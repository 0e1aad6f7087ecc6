//! Rule file and product catalog parsing.
//!
//! This crate is intentionally IO-free: it parses and validates configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod patterns;
mod products;
mod rules;

pub use model::{ProductV1, ProductsConfigV1, RuleBlockV1, RuleFileV1, TargetsV1};
pub use products::{Product, ProductCatalog};
pub use rules::{RuleSet, rule_from_model};

use confguard_types::Severity;

/// Parse one rule definition file into a validated rule.
pub fn parse_rule_yaml(input: &str) -> anyhow::Result<confguard_domain::Rule> {
    let file: RuleFileV1 = serde_yaml::from_str(input)?;
    rule_from_model(file)
}

/// Parse `products.yaml` into a catalog with compiled path patterns.
pub fn parse_products_yaml(input: &str) -> anyhow::Result<ProductCatalog> {
    let cfg: ProductsConfigV1 = serde_yaml::from_str(input)?;
    ProductCatalog::new(cfg)
}

pub fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    v.parse::<Severity>().map_err(anyhow::Error::msg)
}

/// JSON schema of a rule definition file.
pub fn rule_file_schema() -> schemars::Schema {
    schemars::schema_for!(RuleFileV1)
}

/// JSON schema of `products.yaml`.
pub fn products_schema() -> schemars::Schema {
    schemars::schema_for!(ProductsConfigV1)
}
