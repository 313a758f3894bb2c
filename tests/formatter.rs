#[cfg(test)]
mod tests {
    use furnace_report::libs::config::SiteConfig;
    use furnace_report::libs::formatter::{format_minutes, ReportFormatter, DEFAULT_NOTIFICATION};
    use furnace_report::libs::norms::NormsTable;
    use furnace_report::libs::report::{ReportInput, ReportModel};
    use furnace_report::libs::time::TimeOfDay;

    fn input(furnace: &str, times: [&str; 4], notifications: &str) -> ReportInput {
        let [p1s, p1e, p2s, p2e] = times.map(|t| TimeOfDay::parse(t).unwrap());
        ReportInput {
            date: "12.05.2025".to_string(),
            furnace: furnace.to_string(),
            prog1_start: p1s,
            prog1_end: p1e,
            prog2_start: p2s,
            prog2_end: p2e,
            notifications: notifications.to_string(),
        }
    }

    fn render(input: &ReportInput) -> String {
        let norms = NormsTable::default();
        let model = ReportModel::build(input, norms.lookup(&input.furnace).unwrap()).unwrap();
        ReportFormatter::default().render(input, &model)
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(40), "00:40");
        assert_eq!(format_minutes(210), "03:30");
        assert_eq!(format_minutes(510), "08:30");
        assert_eq!(format_minutes(760), "12:40");
        assert_eq!(format_minutes(2160), "36:00");
    }

    #[test]
    fn test_render_on_norm_report() {
        let report = render(&input("Furnace 1", ["08:00", "16:30", "17:10", "20:40"], ""));

        assert!(report.contains("📅 **12.05.2025**"));
        assert!(report.contains("🔘 **Furnace 1**"));
        assert!(report.contains("ON: `08:00`"));
        assert!(report.contains("OFF: `16:30`"));
        assert!(report.contains("ON: `17:10`"));
        assert!(report.contains("OFF: `20:40`"));
        assert!(report.contains("• 🟢 Stage 1: `08:30` (❎ **0.00%** from the set **norm**)"));
        assert!(report.contains("• 🟡 Stage 2: `03:30` (❎ **0.00%** from the set **norm**)"));
        assert!(report.contains("• ⏸️ Break: `00:40` (❎ **0.00%** from the set **norm**)"));
        assert!(report.contains("• 📌 **Total time: 12:40** (❎ **0.00%** from the set **norm**)"));
        assert!(!report.contains("🔺"));
        assert!(!report.contains("🔻"));
    }

    #[test]
    fn test_render_deviation_glyphs_and_rounding() {
        let report = render(&input("Furnace 1", ["08:00", "17:00", "17:30", "20:30"], ""));

        assert!(report.contains("Stage 1: `09:00` (🔺 **5.88%**"));
        assert!(report.contains("Stage 2: `03:00` (🔻 **-14.29%**"));
        assert!(report.contains("Break: `00:30` (🔻 **-25.00%**"));
        assert!(report.contains("**Total time: 12:30** (🔻 **-1.32%**"));
    }

    #[test]
    fn test_render_field_order() {
        let report = render(&input("Furnace 2", ["06:00", "17:00", "17:40", "21:10"], "Crane inspection"));

        let positions: Vec<usize> = [
            "12.05.2025",
            "Furnace 2",
            "`06:00`",
            "`17:40`",
            "`17:00`",
            "`21:10`",
            "Stage 1:",
            "Stage 2:",
            "Break:",
            "Total time:",
            "Crane inspection",
        ]
        .iter()
        .map(|needle| report.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "positions: {:?}", positions);
    }

    #[test]
    fn test_empty_notifications_use_default_sentence() {
        let report = render(&input("Furnace 1", ["08:00", "16:30", "17:10", "20:40"], "   "));
        assert!(report.contains(&format!("⚠️ **{}**", DEFAULT_NOTIFICATION)));
    }

    #[test]
    fn test_notifications_are_trimmed() {
        let report = render(&input("Furnace 1", ["08:00", "16:30", "17:10", "20:40"], "\n  Thermocouple 3 replaced  \t"));
        assert!(report.contains("⚠️ **Thermocouple 3 replaced**"));
        assert!(!report.contains(DEFAULT_NOTIFICATION));
    }

    #[test]
    fn test_site_header_is_configurable() {
        let input = input("Furnace 1", ["08:00", "16:30", "17:10", "20:40"], "");
        let norms = NormsTable::default();
        let model = ReportModel::build(&input, norms.lookup("Furnace 1").unwrap()).unwrap();

        let default_report = ReportFormatter::default().render(&input, &model);
        assert!(default_report.contains("🏭 **Foundry shop | Responsible: Fedotov A.A.**"));

        let formatter = ReportFormatter::new(SiteConfig {
            workshop: "Heat treatment bay".to_string(),
            responsible: "Ivanova M.K.".to_string(),
        });
        let report = formatter.render(&input, &model);
        assert!(report.contains("🏭 **Heat treatment bay | Responsible: Ivanova M.K.**"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = input("Furnace 2", ["06:00", "17:00", "17:40", "21:10"], "ok");
        assert_eq!(render(&input), render(&input));
    }
}
