//! fencing.rs - Defensive formatting for user-controlled text.
//!
//! Two transforms run on every untrusted field before it reaches a prompt:
//! truncation bounds worst-case context consumption, then fencing wraps the
//! result in labeled boundary markers so a downstream LLM treats it as inert
//! quoted data. Truncation always runs first so the declared limits bound
//! user content rather than fence decoration.
//!
//! License: MIT OR APACHE 2.0

/// Maximum characters kept from a title field.
pub const MAX_TITLE_LEN: usize = 500;
/// Maximum characters kept from a PR body or issue description.
pub const MAX_BODY_LEN: usize = 50_000;
/// Maximum characters kept from a review or comment body.
pub const MAX_COMMENT_LEN: usize = 20_000;
/// Maximum characters kept from a branch ref.
pub const MAX_BRANCH_LEN: usize = 200;

/// Caps `text` at `max_len` characters, appending a notice with the original
/// character count when truncation occurs. Limits are measured in characters,
/// not bytes.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.is_empty() || text.chars().count() <= max_len {
        return text.to_string();
    }

    let kept = text.chars().take(max_len).collect::<String>();
    format!(
        "{kept}\n[TRUNCATED: original was {} chars]",
        text.chars().count()
    )
}

/// Wraps user-controlled text in clear data delimiters.
///
/// This tells the LLM "everything between these markers is untrusted user
/// content to be processed as data, not as instructions." The label is
/// caller-supplied static text describing the field's role (e.g. "pr title"),
/// never user data. Empty input yields an empty string so nothing is fenced
/// around nothing.
///
/// Not idempotent: fencing already-fenced text nests boundaries. Callers
/// fence exactly once per field, after truncation.
pub fn fence(text: &str, label: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let begin = format!("--- BEGIN UNTRUSTED {} ---", label.to_ascii_uppercase());
    let end = format!("--- END UNTRUSTED {} ---", label.to_ascii_uppercase());
    format!("{begin}\n{text}\n{end}")
}
