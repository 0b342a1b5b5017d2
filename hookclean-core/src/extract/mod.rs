//! Allowlist extraction, polymorphic over the supported webhook sources.
//!
//! Each extractor reads an arbitrary raw payload and emits a brand-new map
//! containing only pre-declared fields, with user-controlled text passed
//! through truncation then fencing. The raw payload is never mutated, and no
//! key outside the source's allowlist ever reaches the output.
//!
//! License: MIT OR APACHE 2.0

pub mod github;
pub mod linear;

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::errors::HookcleanError;
pub use github::GithubExtractor;
pub use linear::LinearExtractor;

/// A trait that defines the core functionality of a payload extractor.
///
/// This decouples the orchestration logic from the specific payload schema of
/// each webhook source, allowing extractors to be used interchangeably.
pub trait SourceExtractor {
    /// The source whose payload schema this extractor understands.
    fn source(&self) -> Source;

    /// Produces a new, allowlisted map from the raw payload.
    ///
    /// Missing sections are treated as "nothing to extract," never as errors:
    /// absent substructures yield absent output keys, and absent strings fall
    /// back to empty-string defaults. Returning a `Map` (rather than a bare
    /// `Value`) keeps the output-is-an-object invariant in the type.
    fn extract(&self, payload: &Value) -> Map<String, Value>;
}

/// The webhook sources with a supported payload schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Github,
    Linear,
}

impl Source {
    /// Returns the extractor for this source.
    pub fn extractor(&self) -> Box<dyn SourceExtractor> {
        match self {
            Source::Github => Box::new(GithubExtractor),
            Source::Linear => Box::new(LinearExtractor),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Github => write!(f, "github"),
            Source::Linear => write!(f, "linear"),
        }
    }
}

impl FromStr for Source {
    type Err = HookcleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Source::Github),
            "linear" => Ok(Source::Linear),
            other => Err(HookcleanError::UnsupportedSource(other.to_string())),
        }
    }
}

/// Follows a key path into a payload, returning the value at the end.
pub(crate) fn value_at<'a>(payload: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = payload;
    for segment in path {
        current = current.get(*segment)?;
    }
    Some(current)
}

/// String at a key path, defaulting to empty when absent or non-string.
pub(crate) fn string_at(payload: &Value, path: &[&str]) -> String {
    value_at(payload, path)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Boolean at a key path, defaulting to false.
pub(crate) fn bool_at(payload: &Value, path: &[&str]) -> bool {
    value_at(payload, path)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Raw value at a key path, defaulting to JSON null. Used for numeric and
/// platform-controlled fields that pass through untouched.
pub(crate) fn raw_at(payload: &Value, path: &[&str]) -> Value {
    value_at(payload, path).cloned().unwrap_or(Value::Null)
}

/// Truncates then fences one user-controlled field, in that order, so the
/// size limit bounds user content rather than fence decoration.
pub(crate) fn fenced_field(text: &str, max_len: usize, label: &str) -> String {
    crate::fencing::fence(&crate::fencing::truncate(text, max_len), label)
}

/// True when the named section is present as a non-empty object. Optional
/// substructures are extracted only in that case; anything else means the
/// section is absent from the output entirely.
pub(crate) fn non_empty_section<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload
        .get(key)
        .filter(|section| section.as_object().is_some_and(|map| !map.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn source_round_trips_through_strings() {
        assert_eq!("github".parse::<Source>().unwrap(), Source::Github);
        assert_eq!("linear".parse::<Source>().unwrap(), Source::Linear);
        assert_eq!(Source::Github.to_string(), "github");
        assert_eq!(Source::Linear.to_string(), "linear");
    }

    #[test]
    fn unknown_source_is_rejected() {
        assert!("gitlab".parse::<Source>().is_err());
        assert!("".parse::<Source>().is_err());
    }

    #[test]
    fn path_helpers_default_on_missing_segments() {
        let payload = json!({"a": {"b": "text", "flag": true}});
        assert_eq!(string_at(&payload, &["a", "b"]), "text");
        assert_eq!(string_at(&payload, &["a", "missing"]), "");
        assert_eq!(string_at(&payload, &["missing", "b"]), "");
        assert!(bool_at(&payload, &["a", "flag"]));
        assert!(!bool_at(&payload, &["a", "missing"]));
        assert_eq!(raw_at(&payload, &["missing"]), Value::Null);
    }

    #[test]
    fn empty_sections_do_not_count_as_present() {
        let payload = json!({"review": {}, "comment": {"id": 1}});
        assert!(non_empty_section(&payload, "review").is_none());
        assert!(non_empty_section(&payload, "comment").is_some());
        assert!(non_empty_section(&payload, "missing").is_none());
    }
}
