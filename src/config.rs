//! Configuration management for Libscrape

use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::parser::rules::RuleTables;
use crate::report::ReportStyle;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
    /// Directory for a daily rolling log file; stdout only when unset
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Summary document linked from "doc" style reports
    pub doc_id: Option<String>,
}

impl ReportConfig {
    /// Doc style when a document is configured, plain listing otherwise
    pub fn style(&self) -> ReportStyle {
        match &self.doc_id {
            Some(doc_id) if !doc_id.is_empty() => ReportStyle::Doc(doc_id.clone()),
            _ => ReportStyle::Plain,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub rules: RuleTables,
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from `config/` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode)
    }

    /// Load configuration rooted at `dir`.
    ///
    /// Layers, lowest first: built-in defaults, `<dir>/default`,
    /// `<dir>/<run_mode>`, then `LIBSCRAPE_*` variables with `__` between
    /// nested keys (`LIBSCRAPE_RULES__TORONTO__RENEW_OFFSET=3`).
    pub fn load_from(dir: impl AsRef<Path>, run_mode: &str) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();

        let config = Config::builder()
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(run_mode).to_string_lossy()).required(false))
            .add_source(
                Environment::with_prefix("LIBSCRAPE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        tracing::debug!("Configuration loaded from {} (run mode {})", dir.display(), run_mode);
        Ok(app)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}
