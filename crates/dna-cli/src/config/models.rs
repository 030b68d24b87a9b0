use crate::error::{CliError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One count per line.
    Plain,
    /// A single JSON document with every report and the total.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct InputConfig {
    pub strip_trailing_newline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_source: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CliError::Serialization(e.to_string()))
    }
}

#[derive(Default)]
pub struct AppConfigBuilder {
    strip_trailing_newline: Option<bool>,
    format: Option<OutputFormat>,
    show_source: Option<bool>,
}

impl AppConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strip_trailing_newline(mut self, strip: bool) -> Self {
        self.strip_trailing_newline = Some(strip);
        self
    }
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
    pub fn show_source(mut self, show: bool) -> Self {
        self.show_source = Some(show);
        self
    }

    pub fn build(self) -> std::result::Result<AppConfig, ConfigError> {
        Ok(AppConfig {
            input: InputConfig {
                strip_trailing_newline: self
                    .strip_trailing_newline
                    .ok_or(ConfigError::MissingParameter("strip_trailing_newline"))?,
            },
            output: OutputConfig {
                format: self
                    .format
                    .ok_or(ConfigError::MissingParameter("format"))?,
                show_source: self
                    .show_source
                    .ok_or(ConfigError::MissingParameter("show_source"))?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_reports_first_missing_parameter() {
        let result = AppConfigBuilder::new().format(OutputFormat::Json).build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("strip_trailing_newline"))
        );
    }

    #[test]
    fn app_config_renders_as_kebab_case_toml() {
        let config = AppConfigBuilder::new()
            .strip_trailing_newline(true)
            .format(OutputFormat::Json)
            .show_source(false)
            .build()
            .unwrap();

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[input]"));
        assert!(rendered.contains("strip-trailing-newline = true"));
        assert!(rendered.contains("[output]"));
        assert!(rendered.contains("format = \"json\""));
        assert!(rendered.contains("show-source = false"));
    }
}
