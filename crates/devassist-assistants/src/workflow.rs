//! Drives an assistant through validate, dependencies and run.

use crate::assistants::{AssistantKind, Toolbox};
use crate::dependencies::InstallReport;
use crate::error::Result;
use camino::Utf8PathBuf;
use devassist_core::ProjectRequest;
use tracing::{debug, info};

/// A successfully created project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProject {
    pub path: Utf8PathBuf,
    pub name: String,
    pub report: InstallReport,
}

/// Result of running an assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The project was created
    Created(CreatedProject),

    /// Validation failed; nothing was installed or created
    Rejected { errors: Vec<String> },
}

/// Resolve `name` against the working directory and run `kind` on it
pub fn execute(kind: AssistantKind, name: &str, tools: &Toolbox<'_>) -> Result<Outcome> {
    let request = ProjectRequest::from_name(name)?;
    execute_request(kind, &request, tools)
}

/// Run `kind` on an already resolved request.
///
/// Validation errors stop the run before any dependency is touched.
/// Dependency and creation failures are returned as errors; files created
/// before a failure are left in place.
pub fn execute_request(
    kind: AssistantKind,
    request: &ProjectRequest,
    tools: &Toolbox<'_>,
) -> Result<Outcome> {
    let assistant = kind.assistant();
    debug!(
        "Running {} assistant for {} (resolved to {})",
        assistant.fullname(),
        request.original(),
        request.path()
    );

    let errors = assistant.errors(request, tools);
    if !errors.is_empty() {
        return Ok(Outcome::Rejected { errors });
    }

    info!("Checking dependencies...");
    let report = assistant.dependencies(request, tools)?;

    assistant.run(request, tools)?;

    Ok(Outcome::Created(CreatedProject {
        path: request.path().to_owned(),
        name: request.name().to_string(),
        report,
    }))
}
