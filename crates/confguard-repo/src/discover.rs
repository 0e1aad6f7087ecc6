use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashSet;
use walkdir::WalkDir;

pub fn is_yaml_file(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("yaml" | "yml"))
}

/// Expand the given paths into the ordered list of configuration files to validate.
///
/// Behavior:
/// - a directory is walked recursively for `.yaml`/`.yml` files, in sorted order
/// - an explicit file is accepted when it has a YAML extension, otherwise skipped with a warning
/// - a missing path is an error, and so is an empty result
/// - duplicates are dropped, keeping the first occurrence
pub fn discover_config_files(paths: &[Utf8PathBuf]) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut out: Vec<Utf8PathBuf> = Vec::new();
    let mut seen: HashSet<Utf8PathBuf> = HashSet::new();

    for input in paths {
        if input.is_dir() {
            for file in walk_yaml_files(input)? {
                if seen.insert(file.clone()) {
                    out.push(file);
                }
            }
        } else if input.is_file() {
            if !is_yaml_file(input) {
                tracing::warn!(path = %input, "skipping non-YAML file");
                continue;
            }
            if seen.insert(input.clone()) {
                out.push(input.clone());
            }
        } else {
            bail!("path does not exist: {input}");
        }
    }

    if out.is_empty() {
        bail!("no configuration files found");
    }
    tracing::debug!(count = out.len(), "discovered configuration files");
    Ok(out)
}

/// All YAML files below `dir`, sorted by path.
pub(crate) fn walk_yaml_files(dir: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walk {dir}"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(path) = Utf8PathBuf::from_path_buf(entry.into_path()) else {
            tracing::warn!("skipping non UTF-8 path under {dir}");
            continue;
        };
        if is_yaml_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
