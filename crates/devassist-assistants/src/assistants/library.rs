//! Python library assistant

use super::{write_marker, Assistant, Toolbox};
use crate::error::Result;
use crate::templates::{TemplateVars, LIBRARY_SETUP_PY};
use devassist_core::{DependencySpec, ProjectRequest};
use tracing::info;

/// Creates a setuptools-based library with one package
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryAssistant;

impl Assistant for LibraryAssistant {
    fn name(&self) -> &'static str {
        "lib"
    }

    fn fullname(&self) -> &'static str {
        "Python Library"
    }

    fn usage(&self) -> &'static str {
        "Python Library Assistant lets you create a custom python library."
    }

    fn name_help(&self) -> &'static str {
        "Name of the library (can also be full or relative path)"
    }

    fn dependency_spec(&self) -> DependencySpec {
        DependencySpec::new(["python-setuptools"])
    }

    fn run(&self, request: &ProjectRequest, tools: &Toolbox<'_>) -> Result<()> {
        let path = request.path();
        let name = request.name();

        info!("Creating library project {} in {}...", name, request.parent());
        tools.fs.mkdir_p(path)?;

        let package_dir = path.join(name);
        tools.fs.mkdir_p(&package_dir)?;
        tools.fs.touch(&package_dir.join("__init__.py"))?;

        let vars = TemplateVars::new().with("name", name);
        let setup_py = tools.templates.render(LIBRARY_SETUP_PY, &vars)?;
        tools.fs.write_file(&path.join("setup.py"), &setup_py)?;

        write_marker(self, request, tools)?;
        info!(
            "Library project {} in {} has been created.",
            name,
            request.parent()
        );
        Ok(())
    }
}
