use super::models::OutputFormat;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "dna.toml";

pub struct DefaultsConfig {
    pub strip_trailing_newline: bool,
    pub format: OutputFormat,
    pub show_source: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            strip_trailing_newline: true,
            format: OutputFormat::Plain,
            show_source: false,
        }
    }
}
