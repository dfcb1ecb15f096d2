use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; missing values fall back to
/// the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataSettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

/// Where the sales table comes from when the command line does not say.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// File loaded when `--file` is omitted.
    pub default_file: Option<PathBuf>,
    /// Worksheet to read from workbooks. The first sheet is used when unset.
    pub sheet: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Decimal places used when printing numbers.
    pub precision: usize,
    pub format: OutputFormat,
}

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `info` or `loader=debug`. `RUST_LOG` takes precedence.
    pub level: String,
    /// When set, logs go to a daily rolling file in this directory instead of stderr.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision: 2,
            format: OutputFormat::Table,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            directory: None,
        }
    }
}
