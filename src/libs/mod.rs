//! Core library modules for furnace-report.
//!
//! ## Features
//!
//! - **Calculation Engine**: strict time parsing, midnight-aware durations,
//!   norm lookup and deviation computation (`time`, `norms`, `deviation`, `report`)
//! - **Rendering**: the fixed-layout shift report and HH:MM formatting (`formatter`)
//! - **Pipeline**: validation and report generation in one call (`generator`)
//! - **Infrastructure**: configuration, data storage, exports, console tables,
//!   user messages and logging
//!
//! ## Usage
//!
//! ```rust
//! use furnace_report::libs::generator::{RawReportFields, ReportGenerator};
//!
//! let raw = RawReportFields::new("12.05.2025", "Furnace 2", ["06:00", "17:00", "17:40", "21:10"], "");
//! let report = ReportGenerator::default().generate(&raw)?;
//! assert!(report.contains("Furnace 2"));
//! # Ok::<(), furnace_report::libs::error::ReportError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod deviation;
pub mod error;
pub mod export;
pub mod formatter;
pub mod generator;
pub mod logging;
pub mod messages;
pub mod norms;
pub mod report;
pub mod time;
pub mod view;
