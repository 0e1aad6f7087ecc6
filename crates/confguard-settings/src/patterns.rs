use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Reduce a rule file pattern to the form matched against a base filename.
///
/// Patterns containing `**` keep only their last `/`-separated component.
pub fn base_name_pattern(pattern: &str) -> &str {
    if pattern.contains("**") {
        pattern.rsplit('/').next().unwrap_or(pattern)
    } else {
        pattern
    }
}

pub fn build_globset<'a>(
    patterns: impl IntoIterator<Item = &'a str>,
    what: &str,
) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).with_context(|| format!("invalid {what}: {pattern}"))?;
        builder.add(glob);
    }
    builder
        .build()
        .with_context(|| format!("failed to compile {what} set"))
}

/// Base filename of a `/` or `\` separated path.
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
