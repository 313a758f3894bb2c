//! Typed failures of the report engine.
//!
//! Every operation in the calculation pipeline returns [`ReportError`] rather
//! than panicking, so the caller (the CLI, or any other front end) can show
//! the problem to the operator and let them correct the input. Computation is
//! all-or-nothing: when an error is returned no report text exists.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Identifies one of the required input fields of a report request.
///
/// Variants are declared in form order; validation reports the first
/// offending field in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportField {
    Date,
    Furnace,
    Prog1Start,
    Prog1End,
    Prog2Start,
    Prog2End,
}

impl ReportField {
    /// The four time fields, in the order they appear on the form.
    pub const TIMES: [ReportField; 4] = [
        ReportField::Prog1Start,
        ReportField::Prog1End,
        ReportField::Prog2Start,
        ReportField::Prog2End,
    ];
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportField::Date => "date",
            ReportField::Furnace => "furnace",
            ReportField::Prog1Start => "program 1 start",
            ReportField::Prog1End => "program 1 end",
            ReportField::Prog2Start => "program 2 start",
            ReportField::Prog2End => "program 2 end",
        };
        f.write_str(label)
    }
}

/// Failures raised while validating input or computing a report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// A required field was left empty.
    #[error("Required field is empty: {0}")]
    MissingField(ReportField),

    /// A time string does not match the strict `HH:MM` pattern.
    ///
    /// `field` is `None` when the value was parsed outside of a report
    /// request (for example by the interactive form validator).
    #[error("Invalid time '{value}'{}: expected HH:MM (00:00-23:59)", .field.map(|f| format!(" in {}", f)).unwrap_or_default())]
    InvalidTimeFormat { field: Option<ReportField>, value: String },

    /// The furnace is not present in the configured norms table.
    #[error("Unknown furnace: {0}")]
    UnknownFurnace(String),

    /// A configured norm is zero, so no deviation can be computed.
    #[error("Norm for {metric} is zero; check the furnace norms configuration")]
    DivisionByZeroNorm { metric: String },
}

impl ReportError {
    /// Attaches the originating field to an [`ReportError::InvalidTimeFormat`].
    ///
    /// Other variants are returned unchanged.
    pub fn in_field(self, field: ReportField) -> Self {
        match self {
            ReportError::InvalidTimeFormat { value, .. } => ReportError::InvalidTimeFormat {
                field: Some(field),
                value,
            },
            other => other,
        }
    }
}
