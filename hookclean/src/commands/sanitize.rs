//! Sanitize command implementation for webhook payloads.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use hookclean_core::{
    filters, sanitize_payload, scan_payload, FieldFlag, Source,
};
use serde_json::Value;

/// Options for one sanitizer run.
pub struct SanitizeOptions {
    pub source: Source,
    pub input: Option<PathBuf>,
    pub flag_only: bool,
    pub verbose: bool,
}

/// What the run concluded; exit-code policy stays with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Clean run, or sanitized output written.
    Clean,
    /// Flag-only mode found at least one injection flag.
    Flagged,
}

/// The main operation runner for the hookclean CLI.
pub fn run_sanitize(opts: SanitizeOptions) -> Result<RunOutcome> {
    info!("Starting hookclean operation.");

    let raw = read_payload(&opts.input)?;
    let payload: Value =
        serde_json::from_str(&raw).context("Failed to parse payload as JSON")?;
    debug!("Parsed payload: {} bytes of input.", raw.len());

    warn_on_unsupported_event(opts.source, &payload);

    if opts.flag_only {
        // Injection presence alone decides the outcome; no document is built.
        let flags = scan_payload(&payload);
        if opts.verbose {
            emit_flag_diagnostics(&flags);
        }
        info!("Flag-only check finished with {} flag(s).", flags.len());
        return Ok(if flags.is_empty() {
            RunOutcome::Clean
        } else {
            RunOutcome::Flagged
        });
    }

    let outcome = sanitize_payload(opts.source, &payload)?;
    if opts.verbose {
        emit_flag_diagnostics(&outcome.flags);
    }
    write_document(&outcome.document)?;

    info!("Hookclean operation completed.");
    Ok(RunOutcome::Clean)
}

fn read_payload(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin...");
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read payload from stdin")?;
            Ok(raw)
        }
    }
}

/// One diagnostic line per flagged match. Informational only; never part of
/// the primary output contract.
fn emit_flag_diagnostics(flags: &[FieldFlag]) {
    for flag in flags {
        for hit in &flag.hits {
            eprintln!(
                "[FLAGGED] {}: pattern={:?} matched={:?}",
                flag.field, hit.pattern, hit.matched
            );
        }
    }
}

/// Logs a warning when the payload's declared event falls outside the set the
/// downstream agent reacts to. Never affects the sanitized output.
fn warn_on_unsupported_event(source: Source, payload: &Value) {
    match source {
        Source::Github => {
            let action = payload
                .get("action")
                .and_then(Value::as_str)
                .unwrap_or_default();
            match filters::infer_github_event(payload) {
                Some(event) if filters::is_supported_github_event_action(event, action) => {}
                Some(event) => warn!(
                    "GitHub event '{event}' with action '{action}' is outside the supported automation set."
                ),
                None => debug!("Payload shape does not match a known GitHub event."),
            }
        }
        Source::Linear => {
            let event_type = payload
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if !filters::is_supported_linear_type(event_type) {
                warn!("Linear event type '{event_type}' is outside the supported automation set.");
            }
        }
    }
}

/// Writes the final document to stdout: compact JSON, exact string
/// preservation, one trailing newline.
fn write_document(document: &Value) -> Result<()> {
    let encoded = serde_json::to_string(document).context("Failed to encode sanitized payload")?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writer
        .write_all(encoded.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .context("Failed to write sanitized payload to stdout")?;
    Ok(())
}
