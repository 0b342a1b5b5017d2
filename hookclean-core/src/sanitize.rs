//! sanitize.rs - One-shot payload sanitization.
//!
//! Combines the scan and extraction layers into a single pure transform:
//! raw payload in, sanitized document plus collected flags out. Callers that
//! only need the detection signal (flag-only operation) use
//! [`crate::detection::scan_payload`] directly and skip extraction entirely.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde_json::{json, Value};

use crate::detection::{scan_payload, FieldFlag};
use crate::errors::HookcleanError;
use crate::extract::Source;

/// The result of a full sanitization pass.
#[derive(Debug)]
pub struct SanitizeOutcome {
    /// The sanitized document: the source's allowlisted fields plus the
    /// `_sanitized` marker and, when anything was flagged, a `_flags` list
    /// of `{field, count}` summaries.
    pub document: Value,
    /// The full flags, match text included, for diagnostic reporting. The
    /// emitted document carries counts only.
    pub flags: Vec<FieldFlag>,
}

/// Sanitizes one raw payload for the given source.
///
/// The scan runs over the *raw* value, before extraction, so injection
/// attempts in dropped fields still surface as flags. The returned document
/// is a brand-new tree; the input is never mutated.
pub fn sanitize_payload(source: Source, payload: &Value) -> Result<SanitizeOutcome, HookcleanError> {
    let flags = scan_payload(payload);

    let mut out = source.extractor().extract(payload);
    out.insert("_sanitized".to_string(), Value::Bool(true));

    if !flags.is_empty() {
        let summaries = flags
            .iter()
            .map(|flag| json!({"field": flag.field, "count": flag.hits.len()}))
            .collect::<Vec<_>>();
        out.insert("_flags".to_string(), Value::Array(summaries));
    }

    debug!(
        "Sanitized {source} payload: {} output key(s), {} flag(s).",
        out.len(),
        flags.len()
    );

    Ok(SanitizeOutcome {
        document: Value::Object(out),
        flags,
    })
}
