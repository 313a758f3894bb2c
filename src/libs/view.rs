use super::formatter::{format_minutes, format_percent};
use super::norms::NormsTable;
use super::report::ReportModel;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Table of configured furnace norms, durations as HH:MM.
    pub fn norms_table(norms: &NormsTable) -> Table {
        let mut table = Table::new();

        table.add_row(row!["FURNACE", "CYCLE 1", "CYCLE 2", "BREAK", "TOTAL"]);
        for (furnace, set) in norms.iter() {
            table.add_row(row![
                furnace,
                format_minutes(set.cycle1),
                format_minutes(set.cycle2),
                format_minutes(set.break_time),
                format_minutes(set.total)
            ]);
        }

        table
    }

    /// Table of computed metrics with their norms and deviations.
    pub fn metrics_table(model: &ReportModel) -> Table {
        let mut table = Table::new();

        table.add_row(row!["METRIC", "ACTUAL", "NORM", "DEVIATION"]);
        for (kind, metric) in model.metrics() {
            table.add_row(row![
                kind,
                format_minutes(metric.actual_minutes),
                format_minutes(metric.norm_minutes),
                format!("{} {}%", metric.symbol.glyph(), format_percent(metric.deviation_percent))
            ]);
        }

        table
    }

    pub fn norms(norms: &NormsTable) {
        Self::norms_table(norms).printstd();
    }

    pub fn metrics(model: &ReportModel) {
        Self::metrics_table(model).printstd();
    }
}
