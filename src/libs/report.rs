//! Report input and the computed metric model.
//!
//! A heat-treatment run consists of two programs on one furnace. From the
//! four clock times the model derives:
//!
//! ```text
//! prog1 start ──stage 1──▶ prog1 end ──break──▶ prog2 start ──stage 2──▶ prog2 end
//!
//! total = stage 1 + break + stage 2
//! ```
//!
//! The total is the sum of the three computed durations, not a separate clock
//! span from program 1 start to program 2 end.

use super::deviation::{deviate, DeviationSymbol};
use super::error::ReportError;
use super::norms::NormSet;
use super::time::{minutes_between, TimeOfDay};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A validated report request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportInput {
    /// Display-only date string, e.g. `12.05.2025`; never parsed.
    pub date: String,
    pub furnace: String,
    pub prog1_start: TimeOfDay,
    pub prog1_end: TimeOfDay,
    pub prog2_start: TimeOfDay,
    pub prog2_end: TimeOfDay,
    /// Free text as typed by the operator (trimmed only when rendered).
    pub notifications: String,
}

/// The four measured quantities of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricKind {
    Stage1,
    Stage2,
    Break,
    Total,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MetricKind::Stage1 => "Stage 1",
            MetricKind::Stage2 => "Stage 2",
            MetricKind::Break => "Break",
            MetricKind::Total => "Total time",
        };
        f.write_str(label)
    }
}

/// An actual duration compared with its norm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub actual_minutes: u32,
    pub norm_minutes: u32,
    pub deviation_percent: f64,
    pub symbol: DeviationSymbol,
}

impl Metric {
    /// Builds a metric, computing its deviation from `norm_minutes`.
    pub fn new(kind: MetricKind, actual_minutes: u32, norm_minutes: u32) -> Result<Self, ReportError> {
        let deviation = deviate(actual_minutes, norm_minutes, &kind.to_string().to_lowercase())?;
        Ok(Self {
            actual_minutes,
            norm_minutes,
            deviation_percent: deviation.percent,
            symbol: deviation.symbol,
        })
    }
}

/// All computed metrics of one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportModel {
    pub stage1: Metric,
    pub stage2: Metric,
    pub break_metric: Metric,
    pub total_metric: Metric,
}

impl ReportModel {
    /// Derives the metrics of `input` against `norms`.
    ///
    /// # Errors
    ///
    /// Propagates [`ReportError::DivisionByZeroNorm`] from a zero norm.
    pub fn build(input: &ReportInput, norms: &NormSet) -> Result<Self, ReportError> {
        let stage1 = minutes_between(input.prog1_start, input.prog1_end);
        let stage2 = minutes_between(input.prog2_start, input.prog2_end);
        let break_time = minutes_between(input.prog1_end, input.prog2_start);
        let total = stage1 + stage2 + break_time;

        debug!(
            furnace = %input.furnace,
            stage1, stage2, break_time, total,
            "computed run durations"
        );

        Ok(Self {
            stage1: Metric::new(MetricKind::Stage1, stage1, norms.cycle1)?,
            stage2: Metric::new(MetricKind::Stage2, stage2, norms.cycle2)?,
            break_metric: Metric::new(MetricKind::Break, break_time, norms.break_time)?,
            total_metric: Metric::new(MetricKind::Total, total, norms.total)?,
        })
    }

    /// Metrics in report order.
    pub fn metrics(&self) -> [(MetricKind, &Metric); 4] {
        [
            (MetricKind::Stage1, &self.stage1),
            (MetricKind::Stage2, &self.stage2),
            (MetricKind::Break, &self.break_metric),
            (MetricKind::Total, &self.total_metric),
        ]
    }
}
