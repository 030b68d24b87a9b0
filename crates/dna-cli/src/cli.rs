use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "dna",
    author = "DNA Energy Contributors",
    version,
    about = "DNA Energy CLI - measure the energy (UTF-8 byte count) of sequences given as arguments, files or stdin.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to measure many inputs.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure the energy of one or more sequences.
    Energy(EnergyArgs),
    /// Inspect or create the configuration file.
    Config(ConfigArgs),
}

/// Where configuration comes from, shared by every command that reads it.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSourceArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.format=json
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct EnergyArgs {
    /// Sequences to measure. `@PATH` reads a file, `-` reads stdin, `@@TEXT` is the literal `@TEXT`.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Measure the contents of a file. Can be used multiple times.
    #[arg(short, long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Measure everything read from standard input.
    #[arg(long)]
    pub stdin: bool,

    #[command(flatten)]
    pub source: ConfigSourceArgs,

    /// Output format, overriding `output.format`.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the source label next to each count.
    #[arg(long)]
    pub show_source: bool,

    /// Count a trailing line terminator in file and stdin input instead of stripping it.
    #[arg(long)]
    pub keep_newline: bool,
}

/// Arguments for the `config` subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration after merging defaults, file and --set values.
    Show(ConfigSourceArgs),
    /// Write the default configuration template.
    Init {
        /// Where to write the template.
        #[arg(value_name = "PATH", default_value = crate::config::DEFAULT_CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
