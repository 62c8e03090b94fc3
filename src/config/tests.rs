#[cfg(test)]
mod tests {
    use super::super::settings::*;
    use crate::catalog::Category;
    use crate::engine::ConversionError;
    use std::io::Write;

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::empty();
        assert_eq!(config.logging.filter, "unitconv=warn");

        let defaults = config.session_defaults().unwrap();
        assert_eq!(defaults.category, Category::Length);
        assert_eq!(defaults.input, "1");
        assert_eq!(defaults.source, "meter");
        assert_eq!(defaults.target, "km");
    }

    #[test]
    fn test_full_config() {
        let config = Config::load_from_str(
            r#"
[session]
category = "temperature"
input = "100"
from = "celsius"
to = "kelvin"

[logging]
filter = "unitconv=debug"
"#,
        )
        .unwrap();

        assert_eq!(config.logging.filter, "unitconv=debug");

        let defaults = config.session_defaults().unwrap();
        assert_eq!(defaults.category, Category::Temperature);
        assert_eq!(defaults.input, "100");
        assert_eq!(defaults.source, "celsius");
        assert_eq!(defaults.target, "kelvin");
    }

    #[test]
    fn test_category_only_uses_its_default_units() {
        let config = Config::load_from_str("[session]\ncategory = \"weight\"\n").unwrap();
        let defaults = config.session_defaults().unwrap();
        assert_eq!(defaults.source, "kg");
        assert_eq!(defaults.target, "g");
    }

    #[test]
    fn test_rejects_unknown_category() {
        let config = Config::load_from_str("[session]\ncategory = \"volume\"\n").unwrap();
        let err = config.session_defaults().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ConversionError::UnknownCategory(ref c)) if c == "volume"
        ));
    }

    #[test]
    fn test_rejects_unit_from_other_category() {
        let config =
            Config::load_from_str("[session]\ncategory = \"area\"\nfrom = \"kg\"\n").unwrap();
        let err = config.session_defaults().unwrap_err();
        assert_eq!(err.to_string(), "Invalid config: Unknown unit 'kg' for category area");
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = Config::load_from_str("[session\ncategory = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\ninput = \"42\"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.session.input.as_deref(), Some("42"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
