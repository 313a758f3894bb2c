//! Text formatting for durations, deviations and the shift report.
//!
//! ## Format Specifications
//!
//! ### Duration Format
//! Minute counts are shown as "HH:MM":
//! - Hours are zero-padded to 2 digits
//! - Minutes are zero-padded to 2 digits
//! - Hours are not wrapped, so 1500 minutes renders as "25:00"
//!
//! ### Deviation Format
//! Percentages are rounded to exactly two decimals and prefixed with the
//! direction glyph: `🔺 **12.50%**`, `🔻 **-3.33%**`, `❎ **0.00%**`.
//!
//! ## Report Layout
//!
//! [`ReportFormatter::render`] produces a Markdown message meant to be pasted
//! into the plant's chat channel. Field order is fixed: date, site header,
//! furnace, the four raw program times, the four metrics, notifications.
//!
//! ## Examples
//!
//! ```rust
//! use furnace_report::libs::formatter::format_minutes;
//!
//! assert_eq!(format_minutes(510), "08:30");
//! assert_eq!(format_minutes(40), "00:40");
//! assert_eq!(format_minutes(0), "00:00");
//! ```

use super::config::SiteConfig;
use super::deviation::DeviationSymbol;
use super::report::{Metric, ReportInput, ReportModel};

/// Sentence shown when the operator left the notifications empty.
pub const DEFAULT_NOTIFICATION: &str = "All systems operated normally";

const SEPARATOR: &str = "▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬▬";

/// Formats a minute count as "HH:MM" using integer division by 60.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Percentage with two decimals; exact ties round to even.
///
/// Every surface (report text, console table, exports) goes through this so
/// one run never shows two different values.
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}", percent)
}

/// Formats a deviation as `<glyph> **<percent with 2 decimals>%**`.
pub fn format_deviation(percent: f64, symbol: DeviationSymbol) -> String {
    format!("{} **{}%**", symbol.glyph(), format_percent(percent))
}

/// Returns the trimmed notification text, or [`DEFAULT_NOTIFICATION`] if
/// nothing but whitespace was entered.
pub fn notification_text(raw: &str) -> &str {
    match raw.trim() {
        "" => DEFAULT_NOTIFICATION,
        text => text,
    }
}

/// Renders report models into the fixed shift-report template.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    site: SiteConfig,
}

impl ReportFormatter {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    /// Renders `input` and its computed `model` as report text.
    ///
    /// Pure function: the same input always yields the same text.
    pub fn render(&self, input: &ReportInput, model: &ReportModel) -> String {
        let metric = |m: &Metric| format!("`{}` ({} from the set **norm**)", format_minutes(m.actual_minutes), format_deviation(m.deviation_percent, m.symbol));
        let total = &model.total_metric;

        let lines = [
            "🔥 **HEAT TREATMENT REPORT** 🔥  ".to_string(),
            format!("                    **for** 📅 **{}**  ", input.date),
            format!("🏭 **{} | Responsible: {}**", self.site.workshop, self.site.responsible),
            format!("{}  ", SEPARATOR),
            format!("🔘 **{}** | 📶 **Status: Active**", input.furnace),
            "┌───────────────┬───────────────┐  ".to_string(),
            "│ **Program 1**              │ **Program 2**             │  ".to_string(),
            "├───────────────┼───────────────┤  ".to_string(),
            format!("│ 🕖 ON: `{}`           │ 🕖 ON: `{}`          │  ", input.prog1_start, input.prog2_start),
            format!("│ 🕚 OFF: `{}`          │ 🕚 OFF: `{}`         │  ", input.prog1_end, input.prog2_end),
            "└───────────────┴───────────────┘  ".to_string(),
            format!("{}  ", SEPARATOR),
            "📊 **ANALYTICS**".to_string(),
            format!("• 🟢 Stage 1: {}  ", metric(&model.stage1)),
            format!("• 🟡 Stage 2: {}  ", metric(&model.stage2)),
            format!("• ⏸️ Break: {}", metric(&model.break_metric)),
            format!(
                "• 📌 **Total time: {}** ({} from the set **norm**)",
                format_minutes(total.actual_minutes),
                format_deviation(total.deviation_percent, total.symbol)
            ),
            format!("{}  ", SEPARATOR),
            "🚨 **NOTIFICATIONS**".to_string(),
            format!("⚠️ **{}**", notification_text(&input.notifications)),
            "✅ **`Heat treatment: ▰▰▰▰ 100%`**".to_string(),
            SEPARATOR.to_string(),
        ];

        lines.join("\n")
    }
}
