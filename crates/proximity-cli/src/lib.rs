//! Customer proximity CLI library.
//!
//! This crate holds the argument model and report runner behind the
//! `proximity-cli` binary so they can be exercised without spawning a process.

pub mod args;
pub mod run;

pub use args::{Cli, OutputFormat};
pub use run::run_report;
