//! Report generation pipeline.
//!
//! [`ReportGenerator`] is the single entry point a front end needs: hand it
//! the raw field values exactly as the operator entered them and get back
//! either the rendered report or a typed [`ReportError`].
//!
//! ## Pipeline
//!
//! ```text
//! RawReportFields ──▶ required-field check ──▶ strict HH:MM parsing
//!                                                   │
//!        report text ◀── ReportFormatter ◀── ReportModel ◀── norms lookup
//! ```
//!
//! Steps short-circuit on the first failure, in this order:
//! 1. an empty date, furnace or time field gives `MissingField`
//! 2. a malformed time gives `InvalidTimeFormat`
//! 3. an unconfigured furnace gives `UnknownFurnace`, a zero norm gives
//!    `DivisionByZeroNorm`
//!
//! Nothing is written anywhere; persisting the text is the caller's job.

use super::config::{Config, SiteConfig};
use super::error::{ReportError, ReportField};
use super::formatter::ReportFormatter;
use super::norms::NormsTable;
use super::report::{ReportInput, ReportModel};
use super::time::TimeOfDay;
use tracing::{debug, warn};

/// Field values as collected by the input layer, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReportFields {
    pub date: String,
    pub furnace: String,
    pub prog1_start: String,
    pub prog1_end: String,
    pub prog2_start: String,
    pub prog2_end: String,
    pub notifications: String,
}

impl RawReportFields {
    /// Collects the form values; `times` are program 1 start/end, then
    /// program 2 start/end.
    pub fn new(date: &str, furnace: &str, times: [&str; 4], notifications: &str) -> Self {
        let [prog1_start, prog1_end, prog2_start, prog2_end] = times.map(str::to_string);
        Self {
            date: date.to_string(),
            furnace: furnace.to_string(),
            prog1_start,
            prog1_end,
            prog2_start,
            prog2_end,
            notifications: notifications.to_string(),
        }
    }

    fn value(&self, field: ReportField) -> &str {
        match field {
            ReportField::Date => &self.date,
            ReportField::Furnace => &self.furnace,
            ReportField::Prog1Start => &self.prog1_start,
            ReportField::Prog1End => &self.prog1_end,
            ReportField::Prog2Start => &self.prog2_start,
            ReportField::Prog2End => &self.prog2_end,
        }
    }
}

/// Validates raw input, computes metrics and renders the report.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    norms: NormsTable,
    formatter: ReportFormatter,
}

impl ReportGenerator {
    pub fn new(norms: NormsTable, site: SiteConfig) -> Self {
        Self {
            norms,
            formatter: ReportFormatter::new(site),
        }
    }

    /// Generator using the norms and site header from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.norms_table(), config.site())
    }

    pub fn norms(&self) -> &NormsTable {
        &self.norms
    }

    /// Checks required fields and parses the four times.
    ///
    /// A field holding only whitespace counts as empty. Non-empty values are
    /// used verbatim: time strings are not trimmed before strict parsing.
    pub fn validate(&self, raw: &RawReportFields) -> Result<ReportInput, ReportError> {
        let required = [ReportField::Date, ReportField::Furnace].into_iter().chain(ReportField::TIMES);
        for field in required {
            if raw.value(field).trim().is_empty() {
                warn!(%field, "required field is empty");
                return Err(ReportError::MissingField(field));
            }
        }

        let [prog1_start, prog1_end, prog2_start, prog2_end] = parse_times(raw)?;

        Ok(ReportInput {
            date: raw.date.clone(),
            furnace: raw.furnace.clone(),
            prog1_start,
            prog1_end,
            prog2_start,
            prog2_end,
            notifications: raw.notifications.clone(),
        })
    }

    /// Validates `raw` and computes its metrics without rendering.
    pub fn prepare(&self, raw: &RawReportFields) -> Result<(ReportInput, ReportModel), ReportError> {
        let input = self.validate(raw)?;
        let norms = self.norms.lookup(&input.furnace)?;
        let model = ReportModel::build(&input, norms)?;
        debug!(furnace = %input.furnace, date = %input.date, "report model ready");
        Ok((input, model))
    }

    /// Renders an already computed model.
    pub fn render(&self, input: &ReportInput, model: &ReportModel) -> String {
        self.formatter.render(input, model)
    }

    /// Runs the whole pipeline and returns the report text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use furnace_report::libs::generator::{RawReportFields, ReportGenerator};
    ///
    /// let raw = RawReportFields {
    ///     date: "12.05.2025".into(),
    ///     furnace: "Furnace 1".into(),
    ///     prog1_start: "08:00".into(),
    ///     prog1_end: "16:30".into(),
    ///     prog2_start: "17:10".into(),
    ///     prog2_end: "20:40".into(),
    ///     notifications: String::new(),
    /// };
    /// let report = ReportGenerator::default().generate(&raw)?;
    /// assert!(report.contains("**Total time: 12:40**"));
    /// # Ok::<(), furnace_report::libs::error::ReportError>(())
    /// ```
    pub fn generate(&self, raw: &RawReportFields) -> Result<String, ReportError> {
        let (input, model) = self.prepare(raw)?;
        Ok(self.render(&input, &model))
    }
}

fn parse_times(raw: &RawReportFields) -> Result<[TimeOfDay; 4], ReportError> {
    let parse = |field: ReportField| {
        let value = raw.value(field);
        TimeOfDay::parse(value).map_err(|e| {
            warn!(%field, value, "rejected time value");
            e.in_field(field)
        })
    };

    Ok([
        parse(ReportField::Prog1Start)?,
        parse(ReportField::Prog1End)?,
        parse(ReportField::Prog2Start)?,
        parse(ReportField::Prog2End)?,
    ])
}
