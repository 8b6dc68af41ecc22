//! pcset CLI library.
//!
//! This crate provides the commands behind the `pcset` binary: one-shot set
//! analysis, subset scans, the interactive prompt loop, user configuration
//! and the stderr logger.

pub mod commands;
pub mod config;
pub mod logging;
