//! Config command

use anyhow::Result;
use camino::Utf8Path;

use crate::cli::ConfigCommands;
use crate::commands::load_config;
use crate::output;

pub fn run(cmd: ConfigCommands, config_path: Option<&Utf8Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config_path),
    }
}

fn show(config_path: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(config_path)?;

    output::header("Resolved configuration");
    if let Some(path) = config_path {
        output::kv("Config file", path.as_str());
    }
    println!();
    print!("{}", serde_yaml_ng::to_string(&config)?);
    Ok(())
}
