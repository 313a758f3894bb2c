#[cfg(test)]
mod tests {
    use furnace_report::libs::deviation::DeviationSymbol;
    use furnace_report::libs::error::ReportError;
    use furnace_report::libs::norms::{NormSet, NormsTable};
    use furnace_report::libs::report::{MetricKind, ReportInput, ReportModel};
    use furnace_report::libs::time::TimeOfDay;

    fn input(times: [&str; 4]) -> ReportInput {
        let [p1s, p1e, p2s, p2e] = times.map(|t| TimeOfDay::parse(t).unwrap());
        ReportInput {
            date: "12.05.2025".to_string(),
            furnace: "Furnace 1".to_string(),
            prog1_start: p1s,
            prog1_end: p1e,
            prog2_start: p2s,
            prog2_end: p2e,
            notifications: String::new(),
        }
    }

    fn furnace_1() -> NormSet {
        *NormsTable::default().lookup("Furnace 1").unwrap()
    }

    #[test]
    fn test_on_norm_run() {
        let model = ReportModel::build(&input(["08:00", "16:30", "17:10", "20:40"]), &furnace_1()).unwrap();

        assert_eq!(model.stage1.actual_minutes, 510);
        assert_eq!(model.stage2.actual_minutes, 210);
        assert_eq!(model.break_metric.actual_minutes, 40);
        assert_eq!(model.total_metric.actual_minutes, 760);
        for (_, metric) in model.metrics() {
            assert_eq!(metric.deviation_percent, 0.0);
            assert_eq!(metric.symbol, DeviationSymbol::Equal);
        }
    }

    #[test]
    fn test_norms_are_attached() {
        let model = ReportModel::build(&input(["08:00", "16:30", "17:10", "20:40"]), &furnace_1()).unwrap();

        assert_eq!(model.stage1.norm_minutes, 510);
        assert_eq!(model.stage2.norm_minutes, 210);
        assert_eq!(model.break_metric.norm_minutes, 40);
        assert_eq!(model.total_metric.norm_minutes, 760);
    }

    #[test]
    fn test_deviations_off_norm() {
        let model = ReportModel::build(&input(["08:00", "17:00", "17:30", "20:30"]), &furnace_1()).unwrap();

        assert_eq!(model.stage1.actual_minutes, 540);
        assert_eq!(model.stage1.symbol, DeviationSymbol::Above);
        assert_eq!(model.stage2.actual_minutes, 180);
        assert_eq!(model.stage2.symbol, DeviationSymbol::Below);
        assert_eq!(model.break_metric.actual_minutes, 30);
        assert_eq!(model.break_metric.deviation_percent, -25.0);
        assert_eq!(model.total_metric.actual_minutes, 750);
        assert_eq!(model.total_metric.symbol, DeviationSymbol::Below);
    }

    #[test]
    fn test_overnight_first_program() {
        let model = ReportModel::build(&input(["22:00", "06:30", "07:10", "10:40"]), &furnace_1()).unwrap();

        assert_eq!(model.stage1.actual_minutes, 510);
        assert_eq!(model.break_metric.actual_minutes, 40);
        assert_eq!(model.stage2.actual_minutes, 210);
        assert_eq!(model.total_metric.actual_minutes, 760);
    }

    #[test]
    fn test_total_is_sum_not_clock_span() {
        // Program 2 starts before program 1 ends: the break wraps forward a
        // whole day, and the total follows the sum of the three durations.
        let model = ReportModel::build(&input(["08:00", "16:30", "16:00", "20:00"]), &furnace_1()).unwrap();

        assert_eq!(model.break_metric.actual_minutes, 1410);
        assert_eq!(model.total_metric.actual_minutes, 510 + 240 + 1410);
        assert_ne!(model.total_metric.actual_minutes, 720);
    }

    #[test]
    fn test_zero_norm_propagates() {
        let norms = NormSet {
            cycle1: 510,
            cycle2: 210,
            break_time: 0,
            total: 760,
        };
        let error = ReportModel::build(&input(["08:00", "16:30", "17:10", "20:40"]), &norms).unwrap_err();
        assert_eq!(
            error,
            ReportError::DivisionByZeroNorm {
                metric: "break".to_string()
            }
        );
    }

    #[test]
    fn test_metrics_order() {
        let model = ReportModel::build(&input(["08:00", "16:30", "17:10", "20:40"]), &furnace_1()).unwrap();
        let kinds: Vec<MetricKind> = model.metrics().iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, vec![MetricKind::Stage1, MetricKind::Stage2, MetricKind::Break, MetricKind::Total]);
    }
}
