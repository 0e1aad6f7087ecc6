//! Shared test utilities for the confguard workspace.
//!
//! Reports carry timestamps, the tool version and the file paths given on the command line, all
//! of which differ between machines and runs. These helpers mask them so reports can be compared
//! against golden values.

use serde_json::Value;

const TIMESTAMP: &str = "__TIMESTAMP__";
const VERSION: &str = "__VERSION__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only when the root object
///    looks like a report envelope (`schema`, `tool`, `verdict`, `findings`, `data`).
/// 2. **Recursive**: `started_at` and `finished_at` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "findings", "data"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert("version".to_string(), Value::String(VERSION.to_string()));
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

/// Rewrite every `findings[].file` under `root` to be relative to it, with forward slashes.
pub fn relativize_files(mut value: Value, root: &str) -> Value {
    let root = root.replace('\\', "/");
    let prefix = format!("{}/", root.trim_end_matches('/'));
    if let Some(findings) = value.get_mut("findings").and_then(Value::as_array_mut) {
        for finding in findings {
            if let Some(Value::String(file)) = finding.get_mut("file") {
                let normalized = file.replace('\\', "/");
                if let Some(rest) = normalized.strip_prefix(&prefix) {
                    *file = rest.to_string();
                }
            }
        }
    }
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String(TIMESTAMP.to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
