//! walker.rs - Recursive traversal of a payload's string leaves.
//!
//! The walker pairs every string leaf with its dotted structural path
//! (e.g. `pull_request.title`, `data.labels.0.name`). Paths are used only for
//! reporting; they never affect sanitization output.
//!
//! License: MIT OR APACHE 2.0

use serde_json::Value;

/// Strings at or below this character count are skipped by the scan. Short
/// structural tokens (ids, enum values) are unlikely injection vectors and
/// would add noise to flag reports.
pub const MIN_SCAN_LEN: usize = 10;

/// Collects every string leaf longer than [`MIN_SCAN_LEN`] characters,
/// paired with its dotted path, in document order.
pub fn collect_strings(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    visit(value, "", &mut out);
    out
}

fn visit(value: &Value, path: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::String(text) => {
            if text.chars().count() > MIN_SCAN_LEN {
                out.push((path.to_string(), text.clone()));
            }
        }
        Value::Object(map) => {
            for (key, nested) in map {
                visit(nested, &join_path(path, key), out);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                visit(item, &join_path(path, &index.to_string()), out);
            }
        }
        // Numbers, booleans, and null carry no scannable text.
        _ => {}
    }
}

fn join_path(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}.{segment}")
    }
}
