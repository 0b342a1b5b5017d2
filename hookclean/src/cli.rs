// hookclean/src/cli.rs
//! This file defines the command-line interface (CLI) for the hookclean
//! application, including all available arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use hookclean_core::Source;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "hookclean",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitize webhook payloads before they reach an LLM agent",
    long_about = "Hookclean is a command-line utility that sanitizes inbound webhook payloads (GitHub, Linear) before their contents are embedded into prompts for an LLM-driven automation agent. It reduces a payload to an allowlisted field set, fences user-controlled text behind labeled delimiters, truncates oversized fields, and flags known prompt-injection patterns.",
)]
pub struct Cli {
    /// The webhook source whose payload schema applies.
    #[arg(long, value_enum, value_name = "SOURCE", help = "The webhook source the payload came from.")]
    pub source: SourceArg,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the payload from a file instead of stdin.")]
    pub input: Option<PathBuf>,

    /// Only check for injections, don't sanitize. Exit 1 if suspicious.
    #[arg(long = "flag-only", help = "Only check for injections, don't sanitize. Exit 1 if suspicious.")]
    pub flag_only: bool,

    /// Print per-flag detection details to stderr.
    #[arg(long, short = 'v', help = "Print detection details to stderr.")]
    pub verbose: bool,

    /// Enable debug logging (overrides RUST_LOG for the hookclean crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,
}

/// Enum for selecting the webhook source.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum SourceArg {
    /// GitHub pull-request-cycle webhooks.
    Github,
    /// Linear issue and comment webhooks.
    Linear,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Github => Source::Github,
            SourceArg::Linear => Source::Linear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_required() {
        assert!(Cli::try_parse_from(["hookclean"]).is_err());
        assert!(Cli::try_parse_from(["hookclean", "--source", "github"]).is_ok());
    }

    #[test]
    fn source_values_map_to_core_sources() {
        let cli = Cli::try_parse_from(["hookclean", "--source", "linear"]).unwrap();
        assert_eq!(Source::from(cli.source), Source::Linear);
        assert!(!cli.flag_only);
        assert!(cli.input.is_none());
    }

    #[test]
    fn unknown_source_is_rejected_by_clap() {
        assert!(Cli::try_parse_from(["hookclean", "--source", "gitlab"]).is_err());
    }
}
