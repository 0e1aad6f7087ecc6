//! Repository adapters: discover target files, parse YAML documents, load rule directories.
//!
//! This crate is allowed to do filesystem IO. It should not spawn external processes.

#![forbid(unsafe_code)]

mod discover;
mod load;
mod parse;

pub use discover::{discover_config_files, is_yaml_file};
pub use load::{ProductsFile, load_product_catalog, load_rule_set};
pub use parse::{parse_document, read_document};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use confguard_domain::{PathExpr, query};

    /// Parse arbitrary text as a configuration document.
    ///
    /// Returns `Ok(())` on valid YAML, `Err(...)` otherwise. **Never panics** on any input.
    pub fn parse_document(text: &str) -> anyhow::Result<()> {
        let _ = super::parse_document(text)?;
        Ok(())
    }

    /// Parse arbitrary text as a rule definition file. **Never panics** on any input.
    pub fn parse_rule(text: &str) -> anyhow::Result<()> {
        let _ = confguard_settings::parse_rule_yaml(text)?;
        Ok(())
    }

    /// Parse `path` and run it against `text` parsed as a document. **Never panics** on any input.
    pub fn query(text: &str, path: &str) -> anyhow::Result<usize> {
        let doc = super::parse_document(text)?;
        let _ = PathExpr::parse(path);
        Ok(query::resolve_all(doc.root(), path).len())
    }
}
