#[cfg(test)]
mod tests {
    use furnace_report::libs::config::SiteConfig;
    use furnace_report::libs::error::{ReportError, ReportField};
    use furnace_report::libs::generator::{RawReportFields, ReportGenerator};
    use furnace_report::libs::logging;
    use furnace_report::libs::norms::{NormSet, NormsTable};
    use std::collections::BTreeMap;

    fn on_norm_fields() -> RawReportFields {
        RawReportFields::new("12.05.2025", "Furnace 1", ["08:00", "16:30", "17:10", "20:40"], "")
    }

    #[test]
    fn test_generate_on_norm_report() {
        logging::init_test();
        let report = ReportGenerator::default().generate(&on_norm_fields()).unwrap();

        for expected in ["`08:30`", "`03:30`", "`00:40`", "**Total time: 12:40**"] {
            assert!(report.contains(expected), "missing {}", expected);
        }
        assert_eq!(report.matches("❎ **0.00%**").count(), 4);
    }

    #[test]
    fn test_new_maps_times_in_form_order() {
        let raw = on_norm_fields();
        assert_eq!(raw.prog1_start, "08:00");
        assert_eq!(raw.prog1_end, "16:30");
        assert_eq!(raw.prog2_start, "17:10");
        assert_eq!(raw.prog2_end, "20:40");
    }

    #[test]
    fn test_missing_prog2_end() {
        let mut raw = on_norm_fields();
        raw.prog2_end = String::new();

        let result = ReportGenerator::default().generate(&raw);
        assert_eq!(result, Err(ReportError::MissingField(ReportField::Prog2End)));
    }

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        let generator = ReportGenerator::default();

        let mut raw = on_norm_fields();
        raw.date = "  ".to_string();
        raw.prog1_start = String::new();
        assert_eq!(generator.generate(&raw), Err(ReportError::MissingField(ReportField::Date)));

        let mut raw = on_norm_fields();
        raw.furnace = String::new();
        assert_eq!(generator.generate(&raw), Err(ReportError::MissingField(ReportField::Furnace)));
    }

    #[test]
    fn test_missing_field_checked_before_format() {
        let mut raw = on_norm_fields();
        raw.prog1_end = "25:00".to_string();
        raw.prog2_start = String::new();

        assert_eq!(
            ReportGenerator::default().generate(&raw),
            Err(ReportError::MissingField(ReportField::Prog2Start))
        );
    }

    #[test]
    fn test_invalid_prog1_end() {
        let mut raw = on_norm_fields();
        raw.prog1_end = "25:00".to_string();

        let error = ReportGenerator::default().generate(&raw).unwrap_err();
        assert_eq!(
            error,
            ReportError::InvalidTimeFormat {
                field: Some(ReportField::Prog1End),
                value: "25:00".to_string()
            }
        );
        assert_eq!(error.to_string(), "Invalid time '25:00' in program 1 end: expected HH:MM (00:00-23:59)");
    }

    #[test]
    fn test_time_values_are_not_trimmed() {
        let mut raw = on_norm_fields();
        raw.prog2_start = " 17:10".to_string();

        assert!(matches!(
            ReportGenerator::default().generate(&raw),
            Err(ReportError::InvalidTimeFormat {
                field: Some(ReportField::Prog2Start),
                ..
            })
        ));
    }

    #[test]
    fn test_format_checked_before_furnace_lookup() {
        let mut raw = on_norm_fields();
        raw.furnace = "Furnace 9".to_string();
        raw.prog1_start = "8:00".to_string();

        assert!(matches!(
            ReportGenerator::default().generate(&raw),
            Err(ReportError::InvalidTimeFormat { .. })
        ));
    }

    #[test]
    fn test_unknown_furnace() {
        let mut raw = on_norm_fields();
        raw.furnace = "Furnace 9".to_string();

        assert_eq!(
            ReportGenerator::default().generate(&raw),
            Err(ReportError::UnknownFurnace("Furnace 9".to_string()))
        );
    }

    #[test]
    fn test_zero_norm_configuration() {
        let mut furnaces = BTreeMap::new();
        furnaces.insert(
            "Furnace 1".to_string(),
            NormSet {
                cycle1: 0,
                cycle2: 210,
                break_time: 40,
                total: 760,
            },
        );
        let generator = ReportGenerator::new(NormsTable::new(furnaces), SiteConfig::default());

        assert!(matches!(
            generator.generate(&on_norm_fields()),
            Err(ReportError::DivisionByZeroNorm { .. })
        ));
    }

    #[test]
    fn test_prepare_keeps_raw_notifications() {
        let raw = RawReportFields::new("12.05.2025", "Furnace 2", ["06:00", "17:00", "17:40", "21:10"], "  note  ");
        let (input, model) = ReportGenerator::default().prepare(&raw).unwrap();

        assert_eq!(input.notifications, "  note  ");
        assert_eq!(input.prog1_start.to_string(), "06:00");
        assert_eq!(model.stage1.actual_minutes, 660);
        assert_eq!(model.total_metric.actual_minutes, 910);
    }
}
