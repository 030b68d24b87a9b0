use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, AppConfigBuilder, OutputFormat};
use crate::cli::{ConfigSourceArgs, EnergyArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;

/// Values set by dedicated command-line flags. They win over every other layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub strip_trailing_newline: Option<bool>,
    pub format: Option<OutputFormat>,
    pub show_source: Option<bool>,
}

impl From<&EnergyArgs> for ConfigOverrides {
    fn from(args: &EnergyArgs) -> Self {
        Self {
            strip_trailing_newline: args.keep_newline.then_some(false),
            format: args.format,
            show_source: args.show_source.then_some(true),
        }
    }
}

pub fn build_config(source: &ConfigSourceArgs, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &source.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &source.set_values)?;

    let input_file = file_config.input.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let strip_trailing_newline = overrides
        .strip_trailing_newline
        .or(input_file.strip_trailing_newline)
        .unwrap_or(defaults.strip_trailing_newline);
    let format = overrides
        .format
        .or(output_file.format)
        .unwrap_or(defaults.format);
    let show_source = overrides
        .show_source
        .or(output_file.show_source)
        .unwrap_or(defaults.show_source);

    AppConfigBuilder::new()
        .strip_trailing_newline(strip_trailing_newline)
        .format(format)
        .show_source(show_source)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();
        let value_str = value_str.trim();

        match key {
            "input.strip-trailing-newline" => {
                config
                    .input
                    .get_or_insert_with(Default::default)
                    .strip_trailing_newline = Some(
                    parser::parse_bool(value_str)
                        .map_err(|e| CliError::Config(format!("{} for {}", e, key)))?,
                );
            }
            "output.format" => {
                config.output.get_or_insert_with(Default::default).format = Some(
                    parser::parse_output_format(value_str)
                        .map_err(|e| CliError::Config(format!("{} for {}", e, key)))?,
                );
            }
            "output.show-source" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .show_source = Some(
                    parser::parse_bool(value_str)
                        .map_err(|e| CliError::Config(format!("{} for {}", e, key)))?,
                );
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_config(dir: &tempfile::TempDir, toml: &str) -> PathBuf {
        let cfg_path = dir.path().join("dna.toml");
        fs::write(&cfg_path, toml).unwrap();
        cfg_path
    }

    #[test]
    fn build_config_without_sources_uses_defaults() {
        let cfg = build_config(&ConfigSourceArgs::default(), &ConfigOverrides::default())
            .expect("build ok");

        assert!(cfg.input.strip_trailing_newline);
        assert_eq!(cfg.output.format, OutputFormat::Plain);
        assert!(!cfg.output.show_source);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let cfg_path = write_config(
            &dir,
            r#"
            [input]
            strip-trailing-newline = false
            [output]
            format = "json"
            show-source = true
            "#,
        );
        let source = ConfigSourceArgs {
            config: Some(cfg_path),
            set_values: vec![],
        };

        let cfg = build_config(&source, &ConfigOverrides::default()).expect("build ok");

        assert!(!cfg.input.strip_trailing_newline);
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(cfg.output.show_source);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempdir().unwrap();
        let cfg_path = write_config(&dir, "[output]\nshow-source = true\n");
        let source = ConfigSourceArgs {
            config: Some(cfg_path),
            set_values: vec![],
        };

        let cfg = build_config(&source, &ConfigOverrides::default()).expect("build ok");

        assert!(cfg.input.strip_trailing_newline);
        assert_eq!(cfg.output.format, OutputFormat::Plain);
        assert!(cfg.output.show_source);
    }

    #[test]
    fn set_values_override_file() {
        let dir = tempdir().unwrap();
        let cfg_path = write_config(&dir, "[output]\nformat = \"plain\"\n");
        let source = ConfigSourceArgs {
            config: Some(cfg_path),
            set_values: vec![
                "output.format=json".to_string(),
                "input.strip-trailing-newline = no".to_string(),
            ],
        };

        let cfg = build_config(&source, &ConfigOverrides::default()).expect("build ok");

        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(!cfg.input.strip_trailing_newline);
    }

    #[test]
    fn cli_overrides_set_values() {
        let source = ConfigSourceArgs {
            config: None,
            set_values: vec![
                "output.format=json".to_string(),
                "output.show-source=false".to_string(),
            ],
        };
        let overrides = ConfigOverrides {
            strip_trailing_newline: Some(false),
            format: Some(OutputFormat::Plain),
            show_source: Some(true),
        };

        let cfg = build_config(&source, &overrides).expect("build ok");

        assert_eq!(cfg.output.format, OutputFormat::Plain);
        assert!(cfg.output.show_source);
        assert!(!cfg.input.strip_trailing_newline);
    }

    #[test]
    fn unset_energy_flags_do_not_override() {
        let overrides = ConfigOverrides::from(&EnergyArgs::default());
        assert_eq!(overrides, ConfigOverrides::default());

        let args = EnergyArgs {
            keep_newline: true,
            show_source: true,
            ..Default::default()
        };
        let overrides = ConfigOverrides::from(&args);
        assert_eq!(overrides.strip_trailing_newline, Some(false));
        assert_eq!(overrides.show_source, Some(true));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = write_config(&dir, "[output]\ncolour = \"red\"\n");
        let source = ConfigSourceArgs {
            config: Some(cfg_path),
            set_values: vec![],
        };

        let result = build_config(&source, &ConfigOverrides::default());
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_input_error() {
        let dir = tempdir().unwrap();
        let source = ConfigSourceArgs {
            config: Some(dir.path().join("absent.toml")),
            set_values: vec![],
        };

        let result = build_config(&source, &ConfigOverrides::default());
        assert!(matches!(result, Err(CliError::Input { .. })));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["output.format", "output.colour=red", "output.format=yaml"] {
            let source = ConfigSourceArgs {
                config: None,
                set_values: vec![bad.to_string()],
            };
            let result = build_config(&source, &ConfigOverrides::default());
            assert!(
                matches!(result, Err(CliError::Config(_))),
                "expected config error for {bad}"
            );
        }
    }
}
