//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn policy_fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures").join("policy"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(confguard_types::ConfguardReport)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "confguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "confguard.rule.v1.json",
            generate: confguard_settings::rule_file_schema,
        },
        SchemaSpec {
            filename: "confguard.products.v1.json",
            generate: confguard_settings::products_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("schema to JSON")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))
}

fn yaml_as_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("parse {}", path.display()))
}

/// Validate the policy fixtures: every rule file and the product catalog match their schemas,
/// and every product's rule directory loads.
fn conform() -> anyhow::Result<()> {
    let policy = policy_fixtures_dir()?;
    let rule_validator = compile(&confguard_settings::rule_file_schema())?;
    let products_validator = compile(&confguard_settings::products_schema())?;

    let mut errors = Vec::new();
    let mut rule_files = 0usize;

    for entry in walkdir::WalkDir::new(policy.join("rules")).sort_by_file_name() {
        let entry = entry.context("walk rules fixtures")?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || !path.extension().is_some_and(|e| e == "yaml" || e == "yml")
        {
            continue;
        }
        rule_files += 1;
        let value = yaml_as_json(path)?;
        for err in rule_validator.iter_errors(&value) {
            errors.push(format!("{}: {err}", path.display()));
        }
    }

    let catalog_path = policy.join("products.yaml");
    let value = yaml_as_json(&catalog_path)?;
    for err in products_validator.iter_errors(&value) {
        errors.push(format!("{}: {err}", catalog_path.display()));
    }

    let catalog_path = Utf8PathBuf::from_path_buf(catalog_path)
        .map_err(|p| anyhow::anyhow!("non UTF-8 path: {}", p.display()))?;
    let file = confguard_repo::load_product_catalog(&catalog_path)?;
    for product in file.catalog.products() {
        let dir = file.rules_dir(product);
        match confguard_repo::load_rule_set(&dir) {
            Ok(set) => println!("  ✓ product '{}' loads {} rule(s)", product.name, set.len()),
            Err(err) => errors.push(format!("product {}: {err:#}", product.name)),
        }
    }

    if errors.is_empty() {
        println!("✓ {rule_files} rule fixture(s) match the rule schema");
        println!("✓ products.yaml matches the products schema");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

fn explain_coverage() -> anyhow::Result<()> {
    let kinds = confguard_types::explain::all_kinds();
    let mut errors = Vec::new();

    for kind in kinds {
        match confguard_types::explain::lookup_explanation(kind) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Kind '{}' has empty title", kind));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Kind '{}' has empty description", kind));
                }
                if exp.parameters.is_empty() {
                    errors.push(format!("Kind '{}' has empty parameters", kind));
                }
                if let Err(err) = confguard_settings::parse_rule_yaml(exp.example) {
                    errors.push(format!("Kind '{}' example does not load: {err:#}", kind));
                }
            }
            None => errors.push(format!("Kind '{}' has no explanation", kind)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} rule kinds have explanations with loadable examples", kinds.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  emit-schemas      Write JSON schemas to schemas/");
    eprintln!("  conform           Validate policy fixtures against the schemas");
    eprintln!("  explain-coverage  Check every rule kind has an explanation and a loadable example");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
