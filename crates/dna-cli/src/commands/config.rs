use crate::cli::{ConfigArgs, ConfigCommands, ConfigSourceArgs};
use crate::config::{ConfigOverrides, build_config};
use crate::error::{CliError, Result};
use std::path::Path;
use tracing::info;

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show(source) => {
            print!("{}", handle_show(&source)?);
        }
        ConfigCommands::Init { path, force } => {
            handle_init(&path, force)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }
    Ok(())
}

fn handle_show(source: &ConfigSourceArgs) -> Result<String> {
    build_config(source, &ConfigOverrides::default())?.to_toml()
}

fn handle_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "Refusing to overwrite existing file {}. Pass --force to replace it.",
            path.display()
        )));
    }

    let template = handle_show(&ConfigSourceArgs::default())?;
    info!("Writing default configuration to {:?}", path);
    std::fs::write(path, template)?;
    Ok(())
}
