use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One rule definition file (schema v1).
///
/// Scaffolding fields default to empty so that validation can name what is missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleFileV1 {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Disabled rules are dropped when a rule directory is loaded.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// `error`, `warning` (alias `warn`) or `info`.
    #[serde(default)]
    pub severity: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub targets: TargetsV1,

    #[serde(default)]
    pub rule: RuleBlockV1,
}

fn default_enabled() -> bool {
    true
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TargetsV1 {
    /// Globs matched against the base filename of each validated file.
    #[serde(default)]
    pub file_patterns: Vec<String>,
}

/// The `rule:` block: the kind discriminator, the message and flat kind-specific parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleBlockV1 {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub message: String,

    #[serde(flatten)]
    pub params: BTreeMap<String, serde_json::Value>,
}

/// `products.yaml` (schema v1).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProductsConfigV1 {
    #[serde(default)]
    pub products: Vec<ProductV1>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProductV1 {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Rule directory, relative to the directory containing `products.yaml` unless absolute.
    pub rules_dir: String,

    /// Globs matched against the full (forward-slash) path and the base filename.
    #[serde(default)]
    pub path_patterns: Vec<String>,
}
