//! Percentage deviation of an actual duration from its norm.

use super::error::ReportError;
use serde::Serialize;

/// Direction of a deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviationSymbol {
    Above,
    Below,
    Equal,
}

impl DeviationSymbol {
    /// Glyph printed next to the percentage in the report.
    pub fn glyph(&self) -> &'static str {
        match self {
            DeviationSymbol::Above => "🔺",
            DeviationSymbol::Below => "🔻",
            DeviationSymbol::Equal => "❎",
        }
    }
}

/// Result of comparing an actual duration with its norm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deviation {
    /// Signed, unrounded percentage; rounding happens at render time.
    pub percent: f64,
    pub symbol: DeviationSymbol,
}

/// Computes `(actual - norm) / norm * 100` and classifies its sign.
///
/// `metric` only names the norm in the error message.
///
/// # Errors
///
/// [`ReportError::DivisionByZeroNorm`] when `norm` is zero.
///
/// # Examples
///
/// ```rust
/// use furnace_report::libs::deviation::{deviate, DeviationSymbol};
///
/// let d = deviate(550, 500, "stage 1")?;
/// assert_eq!(d.percent, 10.0);
/// assert_eq!(d.symbol, DeviationSymbol::Above);
/// # Ok::<(), furnace_report::libs::error::ReportError>(())
/// ```
pub fn deviate(actual: u32, norm: u32, metric: &str) -> Result<Deviation, ReportError> {
    if norm == 0 {
        return Err(ReportError::DivisionByZeroNorm {
            metric: metric.to_string(),
        });
    }

    let percent = (f64::from(actual) - f64::from(norm)) / f64::from(norm) * 100.0;
    let symbol = if percent > 0.0 {
        DeviationSymbol::Above
    } else if percent < 0.0 {
        DeviationSymbol::Below
    } else {
        DeviationSymbol::Equal
    };

    Ok(Deviation { percent, symbol })
}
