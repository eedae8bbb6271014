#[cfg(test)]
mod tests {
    use super::super::returns::*;
    use chart_core::{ChartError, SeriesPoint};

    fn row(label: &str, values: &[(&str, f64)]) -> SeriesPoint {
        let mut point = SeriesPoint::new(label);
        for (key, value) in values {
            point = point.with_value(*key, *value);
        }
        point
    }

    // The 12-month portfolio-vs-S&P table from the chart request fixtures.
    fn portfolio_year() -> Vec<SeriesPoint> {
        let rows = [
            ("Jan", 50000.0, 50000.0),
            ("Feb", 50300.0, 50150.0),
            ("Mar", 50900.0, 50600.0),
            ("Apr", 50200.0, 50100.0),
            ("May", 51100.0, 50800.0),
            ("Jun", 51600.0, 51200.0),
            ("Jul", 51400.0, 51000.0),
            ("Aug", 51800.0, 51300.0),
            ("Sep", 52200.0, 51600.0),
            ("Oct", 52500.0, 51800.0),
            ("Nov", 52800.0, 52000.0),
            ("Dec", 53200.0, 52200.0),
        ];
        rows.iter()
            .map(|(label, portfolio, sp500)| {
                row(label, &[("portfolio", *portfolio), ("sp500", *sp500)])
            })
            .collect()
    }

    #[test]
    fn test_baseline_is_exactly_zero() {
        let normalized = normalize_returns(&portfolio_year(), "portfolio").unwrap();
        assert_eq!(normalized[0].value("portfolio"), Some(0.0));
        // Exactly +0.0, never -0.0
        assert!(normalized[0].value("portfolio").unwrap().is_sign_positive());
    }

    #[test]
    fn test_rounding_contract() {
        let points = vec![row("Jan", &[("v", 50000.0)]), row("Feb", &[("v", 50300.0)])];
        let normalized = normalize_returns(&points, "v").unwrap();

        // (50300 - 50000) / 50000 * 100 = 0.6
        assert_eq!(normalized[0].value("v"), Some(0.0));
        assert_eq!(normalized[1].value("v"), Some(0.6));
    }

    #[test]
    fn test_full_year_matches_documented_percentages() {
        let normalized = normalize_returns(&portfolio_year(), "portfolio").unwrap();
        let expected = [0.0, 0.6, 1.8, 0.4, 2.2, 3.2, 2.8, 3.6, 4.4, 5.0, 5.6, 6.4];

        for (point, want) in normalized.iter().zip(expected) {
            assert!((point.value("portfolio").unwrap() - want).abs() < 1e-9);
        }
    }

    #[test]
    fn test_untouched_keys_pass_through() {
        let normalized = normalize_returns(&portfolio_year(), "portfolio").unwrap();

        // sp500 still holds raw dollar values
        assert_eq!(normalized[0].value("sp500"), Some(50000.0));
        assert_eq!(normalized[11].value("sp500"), Some(52200.0));
        assert_eq!(normalized[3].label, "Apr");
    }

    #[test]
    fn test_per_key_independence() {
        let points = vec![
            row("Jan", &[("a", 10.0), ("b", 100.0)]),
            row("Feb", &[("a", 20.0), ("b", 50.0)]),
        ];

        let on_a = normalize_returns(&points, "a").unwrap();
        assert_eq!(on_a[1].value("a"), Some(100.0));
        assert_eq!(on_a[1].value("b"), Some(50.0));

        let on_b = normalize_returns(&points, "b").unwrap();
        assert_eq!(on_b[1].value("b"), Some(-50.0));
        assert_eq!(on_b[1].value("a"), Some(20.0));
    }

    #[test]
    fn test_normalize_keys_uses_own_baseline_per_key() {
        let normalized = normalize_keys(&portfolio_year(), &["portfolio", "sp500"]).unwrap();

        assert_eq!(normalized[0].value("portfolio"), Some(0.0));
        assert_eq!(normalized[0].value("sp500"), Some(0.0));
        assert!((normalized[11].value("portfolio").unwrap() - 6.4).abs() < 1e-9);
        assert!((normalized[11].value("sp500").unwrap() - 4.4).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let points = portfolio_year();
        let first = normalize_returns(&points, "sp500").unwrap();
        let second = normalize_returns(&points, "sp500").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let points = portfolio_year();
        let _ = normalize_returns(&points, "portfolio").unwrap();
        assert_eq!(points[1].value("portfolio"), Some(50300.0));
    }

    #[test]
    fn test_empty_series_identity() {
        let result = normalize_returns(&[], "portfolio").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_zero_baseline_is_rejected() {
        let points = vec![row("Jan", &[("v", 0.0)]), row("Feb", &[("v", 10.0)])];
        let err = normalize_returns(&points, "v").unwrap_err();
        assert!(matches!(err, ChartError::InvalidBaseline { .. }));
    }

    #[test]
    fn test_non_finite_baseline_is_rejected() {
        let points = vec![row("Jan", &[("v", f64::NAN)]), row("Feb", &[("v", 10.0)])];
        let err = normalize_returns(&points, "v").unwrap_err();
        assert!(matches!(err, ChartError::InvalidBaseline { .. }));
    }

    #[test]
    fn test_missing_field_fails_whole_call() {
        let points = vec![
            row("Jan", &[("portfolio", 100.0)]),
            row("Feb", &[("benchmark", 101.0)]),
        ];
        let err = normalize_returns(&points, "portfolio").unwrap_err();
        match err {
            ChartError::MissingField { key, index } => {
                assert_eq!(key, "portfolio");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_returns_round_at_hundredths() {
        let points = vec![row("Jan", &[("v", 30000.0)]), row("Feb", &[("v", 29900.0)])];
        let normalized = normalize_returns(&points, "v").unwrap();
        // (29900 - 30000) / 30000 * 100 = -0.333...
        assert_eq!(normalized[1].value("v"), Some(-0.33));
    }
}
