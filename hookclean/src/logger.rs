// hookclean/src/logger.rs
//! Logger bootstrap for the CLI.
//!
//! Respects `RUST_LOG` by default; the `--debug` and `--quiet` flags override
//! the level for the hookclean crates only, so library consumers embedded in
//! noisier processes keep their own filtering.

use log::LevelFilter;

/// Initializes env_logger, optionally pinning the hookclean crates to the
/// given level. Safe to call more than once; later calls are no-ops.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(level) = level_override {
        builder
            .filter_module("hookclean", level)
            .filter_module("hookclean_core", level);
    }

    // Timestamps add nothing to a one-shot tool and complicate test assertions.
    let _ = builder.format_timestamp(None).try_init();
}
