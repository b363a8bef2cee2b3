//! Python assistant commands (django, flask, lib)
//!
//! Each command builds the real collaborators from the runtime
//! configuration and hands them to the assistant workflow.

use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;
use devassist_assistants::{
    workflow, AssistantKind, LocalFs, Outcome, RpmPackageManager, SystemRunner, TemplateStore,
    Toolbox,
};

use crate::cli::PythonCommands;
use crate::commands::load_config;
use crate::output;

/// Run a Python assistant
pub fn run(cmd: PythonCommands, config_path: Option<&Utf8Path>) -> Result<()> {
    let (kind, name) = cmd.into_parts();
    let config = load_config(config_path)?;

    let packages = RpmPackageManager::new(config.packages.clone());
    let templates = TemplateStore::from_config(&config);
    let tools = Toolbox {
        packages: &packages,
        fs: &LocalFs,
        commands: &SystemRunner,
        templates: &templates,
        config: &config,
    };

    create_project(kind, &name, &tools)
}

/// Run `kind` for `name` and report the outcome
fn create_project(kind: AssistantKind, name: &str, tools: &Toolbox<'_>) -> Result<()> {
    let fullname = kind.assistant().fullname();
    output::header(&format!("{} Assistant", fullname));

    let outcome = workflow::execute(kind, name, tools)
        .with_context(|| format!("{} assistant failed", fullname))?;

    match outcome {
        Outcome::Rejected { errors } => {
            for error in &errors {
                output::error(error);
            }
            Err(anyhow!(
                "{} assistant aborted with {} error(s)",
                fullname,
                errors.len()
            ))
        }
        Outcome::Created(project) => {
            if project.report.installed_anything() {
                output::info(&format!(
                    "Installed packages: {}",
                    project.report.newly_installed.join(", ")
                ));
            }
            println!();
            output::success(&format!("{} project '{}' created", fullname, project.name));
            output::kv("Location", project.path.as_str());
            Ok(())
        }
    }
}
