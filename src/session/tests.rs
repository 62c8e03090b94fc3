#[cfg(test)]
mod tests {
    use super::super::state::*;
    use crate::catalog::Category;
    use crate::engine::INVALID_NUMBER_MESSAGE;

    #[test]
    fn test_new_session_defaults() {
        let session = ConverterSession::new();
        assert_eq!(session.category(), Category::Length);
        assert_eq!(session.input(), "1");
        assert_eq!(session.source(), "meter");
        assert_eq!(session.target(), "km");
        assert_eq!(session.result(), "0.001");
        assert_eq!(session.formula(), "1 Meter = 0.001 Kilometer");
    }

    #[test]
    fn test_set_input_recomputes() {
        let mut session = ConverterSession::new();
        session.set_input("2500");
        assert_eq!(session.result(), "2.5");

        session.set_input("abc");
        assert_eq!(session.result(), INVALID_NUMBER_MESSAGE);

        session.set_input("");
        assert_eq!(session.result(), INVALID_NUMBER_MESSAGE);
    }

    #[test]
    fn test_set_category_resets_units() {
        let mut session = ConverterSession::new();
        session.set_target("cm");
        session.set_category(Category::Temperature);

        assert_eq!(session.source(), "celsius");
        assert_eq!(session.target(), "fahrenheit");
        assert_eq!(session.result(), "33.8");
        assert_eq!(session.formula(), "(°C × 9/5) + 32 = °F");
        assert_eq!(session.units().len(), 3);
    }

    #[test]
    fn test_unknown_unit_keeps_previous_result() {
        let mut session = ConverterSession::new();
        session.set_input("1000");
        assert_eq!(session.result(), "1");

        session.set_target("furlong");
        assert_eq!(session.target(), "furlong");
        assert_eq!(session.result(), "1");
        assert_eq!(session.formula(), "1 Meter = 0.001 Kilometer");

        session.set_target("cm");
        assert_eq!(session.result(), "100,000");
    }

    #[test]
    fn test_swap_units() {
        let mut session = ConverterSession::new();
        session.set_input("3");
        session.swap_units();

        assert_eq!(session.source(), "km");
        assert_eq!(session.target(), "meter");
        assert_eq!(session.result(), "3,000");
        assert_eq!(session.formula(), "1 Kilometer = 1,000 Meter");
    }

    #[test]
    fn test_with_defaults() {
        let defaults = SessionDefaults {
            category: Category::Weight,
            input: "2".to_string(),
            source: "kg".to_string(),
            target: "g".to_string(),
        };
        let session = ConverterSession::with_defaults(&defaults);
        assert_eq!(session.result(), "2,000");
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = ConverterSession::new();
        session.set_category(Category::Area);

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["category"], "area");
        assert_eq!(json["source"], "sqmeter");
        assert_eq!(json["target"], "sqkm");
        assert_eq!(json["result"], "0.000001");
    }
}
