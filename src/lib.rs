//! # furnace-report - heat-treatment shift reports
//!
//! Turns the start and stop times of two furnace programs into a shift report:
//! stage durations, the break between programs and the total run, each
//! compared with the furnace's norm as a percentage deviation.
//!
//! ## Features
//!
//! - **Strict Input Validation**: `HH:MM` times are rejected, never clamped
//! - **Overnight Runs**: durations wrap across midnight once
//! - **Configurable Norms**: per-furnace norms from a JSON configuration file
//! - **Report Artifacts**: Markdown report, JSON and CSV exports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use furnace_report::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
