use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, DataSettings, DisplaySettings, LoggingSettings, OutputFormat};

/// Environment variables with this prefix override file settings,
/// e.g. `SALES_DISPLAY__PRECISION=1`.
pub const ENV_PREFIX: &str = "SALES";

/// Largest accepted `display.precision`.
pub const MAX_PRECISION: usize = 10;

/// Loads the application configuration.
///
/// With `path` the file must exist. Without it, `config.toml` in the working
/// directory is read if present. Environment variables are applied on top,
/// and the result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let environment = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true);

    build_config(path, environment)
}

fn build_config(path: Option<&Path>, environment: config::Environment) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        // Tells the builder to look for a file named `config.toml`
        None => config::File::with_name("config").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(environment)
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.display.precision > MAX_PRECISION {
        return Err(ConfigError::ValidationError(format!(
            "display.precision must be at most {MAX_PRECISION}, got {}",
            config.display.precision
        )));
    }

    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.level must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::Builder;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = toml_file("");

        let config = build_config(Some(file.path()), environment(&[])).unwrap();

        assert_eq!(config.display.precision, 2);
        assert_eq!(config.display.format, OutputFormat::Table);
        assert_eq!(config.logging.level, "warn");
        assert!(config.data.default_file.is_none());
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn test_file_values_are_read() {
        let file = toml_file(
            r#"
[data]
default_file = "data/sales.xlsx"
sheet = "Q1"

[display]
precision = 0
format = "json"

[logging]
level = "debug"
"#,
        );

        let config = build_config(Some(file.path()), environment(&[])).unwrap();

        assert_eq!(config.data.default_file.as_deref(), Some(Path::new("data/sales.xlsx")));
        assert_eq!(config.data.sheet.as_deref(), Some("Q1"));
        assert_eq!(config.display.precision, 0);
        assert_eq!(config.display.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = toml_file("[display]\nprecision = 4\n");

        let config = build_config(
            Some(file.path()),
            environment(&[("SALES_DISPLAY__PRECISION", "1"), ("SALES_LOGGING__LEVEL", "info")]),
        )
        .unwrap();

        assert_eq!(config.display.precision, 1);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_precision_is_validated() {
        let file = toml_file("[display]\nprecision = 42\n");

        let err = build_config(Some(file.path()), environment(&[])).unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = build_config(Some(Path::new("no/such/config.toml")), environment(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
