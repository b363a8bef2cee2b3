//! Inspect command: show how a project was generated

use anyhow::{Context, Result};
use camino::Utf8Path;
use devassist_core::MarkerFile;

use crate::cli::InspectArgs;
use crate::commands::load_config;
use crate::output;

pub fn run(args: InspectArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let marker = MarkerFile::load(&args.path, &config.marker_file)
        .with_context(|| format!("Failed to read project information from {}", args.path))?;

    output::header(&format!("Project {}", args.path));
    output::kv("Assistant", &marker.assistant_display());
    for (key, value) in &marker.original_kwargs {
        output::kv(key, value);
    }
    output::kv("Created", &marker.created.to_rfc3339());
    output::kv("Generated by", &marker.devassistant_version);

    if marker.devassistant_version != env!("CARGO_PKG_VERSION") {
        output::warning(&format!(
            "Generated by devassist {}, this is {}",
            marker.devassistant_version,
            env!("CARGO_PKG_VERSION")
        ));
    }

    if let Some(command) = rerun_command(&marker) {
        println!();
        output::info(&format!("Re-create with: {}", command));
    }
    Ok(())
}

/// Command line that reproduces the recorded invocation
fn rerun_command(marker: &MarkerFile) -> Option<String> {
    if marker.subassistant_path.is_empty() {
        return None;
    }
    let name = marker.original_kwargs.get("name")?;
    Some(format!(
        "devassist {} --name {}",
        marker.subassistant_path.join(" "),
        name
    ))
}
