//! The Python assistants
//!
//! Every assistant follows the same contract, driven in order by
//! [`crate::workflow`]:
//! 1. [`Assistant::errors`] validates the request without side effects
//! 2. [`Assistant::dependencies`] makes sure the OS packages are present
//! 3. [`Assistant::run`] creates the project and writes the marker file

mod django;
mod flask;
mod library;

pub use django::DjangoAssistant;
pub use flask::FlaskAssistant;
pub use library::LibraryAssistant;

use crate::dependencies::{ensure_dependencies, InstallReport};
use crate::error::{Error, Result};
use crate::helpers::{CommandRunner, PackageManager, PathHelper};
use crate::templates::TemplateRenderer;
use camino::Utf8PathBuf;
use devassist_core::{DependencySpec, MarkerFile, ProjectRequest, RuntimeConfig};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Name of the assistant group all Python assistants belong to
pub const GROUP_NAME: &str = "python";

/// Display name of the assistant group
pub const GROUP_FULLNAME: &str = "Python";

/// Collaborators handed to every assistant step
#[derive(Clone, Copy)]
pub struct Toolbox<'a> {
    pub packages: &'a dyn PackageManager,
    pub fs: &'a dyn PathHelper,
    pub commands: &'a dyn CommandRunner,
    pub templates: &'a dyn TemplateRenderer,
    pub config: &'a RuntimeConfig,
}

/// A scaffolding assistant
pub trait Assistant {
    /// Short name used on the command line
    fn name(&self) -> &'static str;

    /// Display name
    fn fullname(&self) -> &'static str;

    /// One-line description shown in help output
    fn usage(&self) -> &'static str;

    /// Help text for the `--name` argument
    fn name_help(&self) -> &'static str {
        "Name of the project (can also be full or relative path)"
    }

    /// OS packages required before [`Assistant::run`]
    fn dependency_spec(&self) -> DependencySpec;

    /// Validate the request; an empty list means the run may proceed
    fn errors(&self, request: &ProjectRequest, tools: &Toolbox<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        if tools.fs.path_exists(request.path()) {
            errors.push(format!("Path exists: {}", request.path()));
        }
        errors
    }

    /// Install whatever part of [`Assistant::dependency_spec`] is missing
    fn dependencies(&self, _request: &ProjectRequest, tools: &Toolbox<'_>) -> Result<InstallReport> {
        ensure_dependencies(&self.dependency_spec(), tools.packages)
    }

    /// Create the project
    fn run(&self, request: &ProjectRequest, tools: &Toolbox<'_>) -> Result<()>;

    /// Assistant path from the top-level group, e.g. `[python, flask]`
    fn subassistant_path(&self) -> Vec<String> {
        vec![GROUP_NAME.to_string(), self.name().to_string()]
    }
}

/// Write the marker file into the freshly created project
pub(crate) fn write_marker(
    assistant: &dyn Assistant,
    request: &ProjectRequest,
    tools: &Toolbox<'_>,
) -> Result<Utf8PathBuf> {
    let mut kwargs = BTreeMap::new();
    kwargs.insert("name".to_string(), request.original().to_string());

    let marker = MarkerFile::new(assistant.subassistant_path(), kwargs);
    let path = MarkerFile::path_in(request.path(), &tools.config.marker_file);

    debug!("Writing marker file {}", path);
    tools.fs.write_file(&path, &marker.to_yaml()?)?;
    Ok(path)
}

/// The closed set of available assistants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssistantKind {
    Django,
    Flask,
    Library,
}

impl AssistantKind {
    /// All assistants in display order
    pub fn all() -> [Self; 3] {
        [Self::Django, Self::Flask, Self::Library]
    }

    /// Resolve an assistant by its command-line name
    pub fn from_name(name: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|kind| kind.assistant().name() == name)
            .ok_or_else(|| {
                let available = Self::all()
                    .iter()
                    .map(|k| k.assistant().name())
                    .collect::<Vec<_>>()
                    .join(", ");
                Error::unknown_assistant(name, available)
            })
    }

    /// The assistant implementation
    pub fn assistant(&self) -> &'static dyn Assistant {
        match self {
            Self::Django => &DjangoAssistant,
            Self::Flask => &FlaskAssistant,
            Self::Library => &LibraryAssistant,
        }
    }
}

impl fmt::Display for AssistantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.assistant().name())
    }
}

impl FromStr for AssistantKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(AssistantKind::from_name("django").unwrap(), AssistantKind::Django);
        assert_eq!(AssistantKind::from_name("flask").unwrap(), AssistantKind::Flask);
        assert_eq!("lib".parse::<AssistantKind>().unwrap(), AssistantKind::Library);
    }

    #[test]
    fn test_unknown_name_lists_available() {
        let err = AssistantKind::from_name("rails").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown assistant: rails. Available assistants: django, flask, lib"
        );
    }

    #[test]
    fn test_metadata() {
        let lib = AssistantKind::Library.assistant();
        assert_eq!(lib.fullname(), "Python Library");
        assert_eq!(lib.subassistant_path(), ["python", "lib"]);
        assert!(lib.name_help().starts_with("Name of the library"));
        assert_eq!(AssistantKind::Flask.to_string(), "flask");
    }

    #[test]
    fn test_dependency_specs() {
        assert_eq!(
            AssistantKind::Django.assistant().dependency_spec().packages(),
            ["python-django"]
        );
        assert_eq!(
            AssistantKind::Flask.assistant().dependency_spec().packages(),
            ["python-flask", "python-flask-sqlalchemy", "python-flask-wtf"]
        );
        assert_eq!(
            AssistantKind::Library.assistant().dependency_spec().packages(),
            ["python-setuptools"]
        );
    }
}
