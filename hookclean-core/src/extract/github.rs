//! GitHub webhook payload extraction.
//!
//! Structural fields (action, numbers, logins, repo names, SHAs) are
//! controlled by the platform and pass through untouched. Free-text fields
//! (title, body, review/comment bodies) are user-controlled and get truncated
//! then fenced. Branch refs are user-chosen names: length-capped but left
//! unfenced so downstream tooling can still use them verbatim.
//!
//! License: MIT OR APACHE 2.0

use serde_json::{json, Map, Value};

use crate::extract::{
    bool_at, fenced_field, non_empty_section, raw_at, string_at, Source, SourceExtractor,
};
use crate::fencing::{truncate, MAX_BODY_LEN, MAX_BRANCH_LEN, MAX_COMMENT_LEN, MAX_TITLE_LEN};

/// Allowlist extractor for GitHub pull-request-cycle webhook payloads.
pub struct GithubExtractor;

impl SourceExtractor for GithubExtractor {
    fn source(&self) -> Source {
        Source::Github
    }

    fn extract(&self, payload: &Value) -> Map<String, Value> {
        let mut out = Map::new();

        out.insert("action".into(), Value::String(string_at(payload, &["action"])));

        // Best-effort PR number: an explicit non-null top-level number wins,
        // otherwise fall back to the nested one.
        let number = payload
            .get("number")
            .filter(|n| !n.is_null())
            .cloned()
            .unwrap_or_else(|| raw_at(payload, &["pull_request", "number"]));
        out.insert("number".into(), number);

        out.insert(
            "sender".into(),
            json!({"login": string_at(payload, &["sender", "login"])}),
        );

        out.insert(
            "repository".into(),
            json!({
                "full_name": string_at(payload, &["repository", "full_name"]),
                "default_branch": string_at(payload, &["repository", "default_branch"]),
            }),
        );

        // GitHub App installation id (platform-controlled).
        if non_empty_section(payload, "installation").is_some() {
            out.insert(
                "installation".into(),
                json!({"id": raw_at(payload, &["installation", "id"])}),
            );
        }

        if let Some(pr) = non_empty_section(payload, "pull_request") {
            out.insert(
                "pull_request".into(),
                json!({
                    "number": raw_at(pr, &["number"]),
                    "state": string_at(pr, &["state"]),
                    "draft": bool_at(pr, &["draft"]),
                    "merged": bool_at(pr, &["merged"]),
                    "title": fenced_field(&string_at(pr, &["title"]), MAX_TITLE_LEN, "pr title"),
                    "body": fenced_field(&string_at(pr, &["body"]), MAX_BODY_LEN, "pr body"),
                    "head": {
                        "ref": truncate(&string_at(pr, &["head", "ref"]), MAX_BRANCH_LEN),
                        "sha": string_at(pr, &["head", "sha"]),
                    },
                    "base": {
                        "ref": truncate(&string_at(pr, &["base", "ref"]), MAX_BRANCH_LEN),
                        "sha": string_at(pr, &["base", "sha"]),
                    },
                    "user": {"login": string_at(pr, &["user", "login"])},
                    "changed_files": raw_at(pr, &["changed_files"]),
                    "additions": raw_at(pr, &["additions"]),
                    "deletions": raw_at(pr, &["deletions"]),
                }),
            );
        }

        if let Some(review) = non_empty_section(payload, "review") {
            out.insert(
                "review".into(),
                json!({
                    "state": string_at(review, &["state"]),
                    "body": fenced_field(&string_at(review, &["body"]), MAX_COMMENT_LEN, "review body"),
                    "user": {"login": string_at(review, &["user", "login"])},
                }),
            );
        }

        if let Some(comment) = non_empty_section(payload, "comment") {
            out.insert(
                "comment".into(),
                json!({
                    "id": raw_at(comment, &["id"]),
                    "body": fenced_field(&string_at(comment, &["body"]), MAX_COMMENT_LEN, "comment body"),
                    "user": {"login": string_at(comment, &["user", "login"])},
                    "path": string_at(comment, &["path"]),
                    "line": raw_at(comment, &["line"]),
                }),
            );
        }

        out
    }
}
