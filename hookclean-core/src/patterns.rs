//! patterns.rs - The injection-pattern table and its one-time compilation.
//!
//! The pattern list is a data contract: its exact contents define detection
//! coverage, and downstream flag reports quote the pattern source strings
//! verbatim. Do not edit a pattern without revisiting that contract.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};

/// Ordered injection-indicative patterns. Matching is case-insensitive
/// throughout; the inline `(?i)` flags are part of the quoted source text.
///
/// These catch common prompt-injection techniques. Not exhaustive — the
/// fencing layer matters more than pattern matching.
pub const INJECTION_PATTERNS: &[&str] = &[
    // Direct role/instruction hijacking
    r"(?i)\b(you are|you're) (now |)(a |an |)(new |different |)?(assistant|ai|bot|system|admin)\b",
    r"(?i)\bignore (all |)(previous|prior|above|earlier) (instructions|prompts|context|rules)\b",
    r"(?i)\bignore (everything|anything) (above|before|previously)\b",
    r"(?i)\bforget (your|all|previous|prior) (instructions|rules|prompts|constraints)\b",
    r"(?i)\boverride (system|safety|security) (prompt|instructions|rules|settings)\b",
    r"(?i)\b(system|admin|root) ?(prompt|override|mode|access)\b",
    r"(?i)\bnew (system ?prompt|instructions|persona|role)\b",
    // Delimiter escape attempts
    r"(?i)<\/?system>",
    r"(?i)\[INST\]",
    r"(?i)\[\/INST\]",
    r"(?i)<<SYS>>",
    r"(?i)<\|im_start\|>",
    r"(?i)```system",
    // Exfiltration / action hijacking
    r"(?i)\b(execute|run|eval|exec)\s*\(",
    r"(?i)\bcurl\s+-",
    r"(?i)\bwget\s+",
    r"(?i)\b(rm|del|remove)\s+(-rf?|--force)",
    // Encoded payloads
    r"(?i)\bbase64[_\s\-]*(decode|encode|eval)",
    r"(?i)\batob\s*\(",
    // Social engineering the agent
    r"(?i)\bdo not (review|check|flag|report|mention)\b",
    r"(?i)\bthis is (a |)(test|safe|authorized|harmless)\b.*\b(ignore|skip|bypass)\b",
    r"(?i)\bpretend (you|that|to)\b",
    r"(?i)\brole\s*:\s*(system|assistant|user)\b",
];

lazy_static! {
    /// The compiled pattern table, built once per process and read-only
    /// afterwards. The table is fixed data shipped with the library, so a
    /// pattern that fails to compile is a programmer error, not a runtime
    /// condition.
    static ref COMPILED_PATTERNS: Vec<Regex> = compile_patterns();
}

fn compile_patterns() -> Vec<Regex> {
    debug!("Compiling {} injection patterns.", INJECTION_PATTERNS.len());
    INJECTION_PATTERNS
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
                .build()
                .expect("injection pattern must compile")
        })
        .collect()
}

/// Returns the compiled pattern table in declaration order.
pub fn compiled_patterns() -> &'static [Regex] {
    &COMPILED_PATTERNS
}
