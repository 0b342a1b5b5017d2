//! Command implementations for the hookclean CLI.

pub mod sanitize;
