#[cfg(test)]
mod tests {
    use furnace_report::libs::deviation::{deviate, DeviationSymbol};
    use furnace_report::libs::error::ReportError;

    #[test]
    fn test_deviation_equal_to_norm() {
        for norm in [1, 40, 210, 510, 760, 1439] {
            let deviation = deviate(norm, norm, "stage 1").unwrap();
            assert_eq!(deviation.percent, 0.0);
            assert_eq!(deviation.symbol, DeviationSymbol::Equal);
        }
    }

    #[test]
    fn test_deviation_symbol_follows_sign() {
        let norm = 210;
        for actual in 0..=420 {
            let deviation = deviate(actual, norm, "stage 2").unwrap();
            let expected = if actual > norm {
                DeviationSymbol::Above
            } else if actual < norm {
                DeviationSymbol::Below
            } else {
                DeviationSymbol::Equal
            };
            assert_eq!(deviation.symbol, expected, "actual = {}", actual);
        }
    }

    #[test]
    fn test_deviation_is_not_rounded() {
        let deviation = deviate(540, 510, "stage 1").unwrap();
        assert!((deviation.percent - 5.882352941176471).abs() < 1e-12);

        let deviation = deviate(0, 40, "break").unwrap();
        assert_eq!(deviation.percent, -100.0);
        assert_eq!(deviation.symbol, DeviationSymbol::Below);
    }

    #[test]
    fn test_zero_norm_is_rejected() {
        let error = deviate(30, 0, "break").unwrap_err();
        assert_eq!(
            error,
            ReportError::DivisionByZeroNorm {
                metric: "break".to_string()
            }
        );
        assert!(error.to_string().contains("break"));
    }

    #[test]
    fn test_symbol_glyphs_are_distinct() {
        assert_eq!(DeviationSymbol::Above.glyph(), "🔺");
        assert_eq!(DeviationSymbol::Below.glyph(), "🔻");
        assert_eq!(DeviationSymbol::Equal.glyph(), "❎");
    }
}
