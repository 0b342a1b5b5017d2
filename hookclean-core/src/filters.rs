//! filters.rs - Event filters for the downstream automation agent.
//!
//! The agent only reacts to the pull-request review cycle on GitHub and to
//! issue/comment events on Linear. These helpers let callers warn when a
//! payload falls outside that set; they never affect sanitization output.

use serde_json::Value;

/// True when a GitHub event/action pair is one the downstream agent handles.
pub fn is_supported_github_event_action(event: &str, action: &str) -> bool {
    let event_allowed = matches!(
        event,
        "pull_request" | "pull_request_review" | "pull_request_review_comment" | "issue_comment"
    );
    if !event_allowed {
        return false;
    }

    matches!(
        action,
        "opened" | "synchronize" | "reopened" | "submitted" | "created"
    )
}

/// True when a Linear event type is one the downstream agent handles.
pub fn is_supported_linear_type(event_type: &str) -> bool {
    matches!(event_type, "Issue" | "Comment")
}

/// Best-effort GitHub event kind, inferred from payload shape.
///
/// The delivery header that names the event never reaches this tool, so the
/// kind is derived from which sections are present: a comment alongside an
/// issue is an issue comment, a comment alongside a PR is a review comment,
/// a review is a review event, and a bare PR section is a pull_request event.
pub fn infer_github_event(payload: &Value) -> Option<&'static str> {
    let has = |key: &str| payload.get(key).is_some_and(|v| !v.is_null());

    if has("comment") {
        if has("issue") {
            Some("issue_comment")
        } else {
            Some("pull_request_review_comment")
        }
    } else if has("review") {
        Some("pull_request_review")
    } else if has("pull_request") {
        Some("pull_request")
    } else {
        None
    }
}
