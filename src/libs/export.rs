//! Writing report artifacts to disk.
//!
//! The rendered report is conventionally saved next to the operator as a
//! Markdown file named after the report date, `12.05.2025` becoming
//! `Report_12_05_2025.md`. The same report can also be exported as JSON or
//! CSV for spreadsheets and downstream tooling.
//!
//! ## Supported Export Formats
//!
//! - **md**: the rendered report text, exactly as shown to the operator
//! - **json**: input times, metrics and norms as structured data
//! - **csv**: one row per metric
//!
//! Files are only written after the report has been fully computed, so a
//! validation error never leaves a partial artifact behind.

use super::formatter::{format_minutes, format_percent, notification_text};
use super::report::{ReportInput, ReportModel};
use anyhow::Result;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output format of the written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Rendered Markdown report text.
    #[default]
    #[value(name = "md", alias = "markdown")]
    Markdown,

    /// Structured JSON with raw times, metrics and norms.
    Json,

    /// Comma-separated metric table.
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// One metric row of an exported report.
#[derive(Debug, Serialize)]
pub struct ExportMetric {
    /// Metric label, e.g. "Stage 1"
    pub name: String,
    /// Actual duration in HH:MM format
    pub actual: String,
    pub actual_minutes: u32,
    /// Norm in HH:MM format
    pub norm: String,
    pub norm_minutes: u32,
    /// Deviation rounded to two decimals, as shown in the report text
    pub deviation_percent: f64,
    /// Above, Below or Equal
    pub symbol: String,
}

/// Serializable view of a generated report.
#[derive(Debug, Serialize)]
pub struct ExportReport {
    pub date: String,
    pub furnace: String,
    pub prog1_start: String,
    pub prog1_end: String,
    pub prog2_start: String,
    pub prog2_end: String,
    pub notifications: String,
    pub metrics: Vec<ExportMetric>,
}

impl ExportReport {
    pub fn new(input: &ReportInput, model: &ReportModel) -> Self {
        let metrics = model
            .metrics()
            .into_iter()
            .map(|(kind, metric)| ExportMetric {
                name: kind.to_string(),
                actual: format_minutes(metric.actual_minutes),
                actual_minutes: metric.actual_minutes,
                norm: format_minutes(metric.norm_minutes),
                norm_minutes: metric.norm_minutes,
                deviation_percent: format_percent(metric.deviation_percent)
                    .parse()
                    .unwrap_or(metric.deviation_percent),
                symbol: format!("{:?}", metric.symbol),
            })
            .collect();

        Self {
            date: input.date.clone(),
            furnace: input.furnace.clone(),
            prog1_start: input.prog1_start.to_string(),
            prog1_end: input.prog1_end.to_string(),
            prog2_start: input.prog2_start.to_string(),
            prog2_end: input.prog2_end.to_string(),
            notifications: notification_text(&input.notifications).to_string(),
            metrics,
        }
    }
}

/// File name (without extension) for a report dated `date`.
///
/// Date separators `.` become `_`; path separators are replaced as well so
/// the file always lands inside the output directory.
pub fn report_file_stem(date: &str) -> String {
    let date: String = date
        .trim()
        .chars()
        .map(|c| match c {
            '.' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("Report_{}", date)
}

/// Writes generated reports in the chosen format into a directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    format: ExportFormat,
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_dir: PathBuf) -> Self {
        Self { format, output_dir }
    }

    /// Full path the report for `input` will be written to.
    pub fn output_path(&self, input: &ReportInput) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", report_file_stem(&input.date), self.format.extension()))
    }

    /// Writes the report and returns the path of the created file.
    ///
    /// The output directory is created if it does not exist. An existing
    /// file for the same date is overwritten.
    pub fn export(&self, input: &ReportInput, model: &ReportModel, text: &str) -> Result<PathBuf> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir)?;
        }
        let path = self.output_path(input);

        match self.format {
            ExportFormat::Markdown => Self::write_markdown(&path, text)?,
            ExportFormat::Json => Self::write_json(&path, &ExportReport::new(input, model))?,
            ExportFormat::Csv => Self::write_csv(&path, &ExportReport::new(input, model))?,
        }

        debug!(path = %path.display(), format = ?self.format, "report written");
        Ok(path)
    }

    fn write_markdown(path: &Path, text: &str) -> Result<()> {
        File::create(path)?.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_json(path: &Path, report: &ExportReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        File::create(path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_csv(path: &Path, report: &ExportReport) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;

        wtr.write_record(["Metric", "Actual", "Actual minutes", "Norm", "Norm minutes", "Deviation %", "Symbol"])?;
        for metric in &report.metrics {
            wtr.write_record([
                metric.name.clone(),
                metric.actual.clone(),
                metric.actual_minutes.to_string(),
                metric.norm.clone(),
                metric.norm_minutes.to_string(),
                format_percent(metric.deviation_percent),
                metric.symbol.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
