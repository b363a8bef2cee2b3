//! Flask project assistant

use super::{write_marker, Assistant, Toolbox};
use crate::error::Result;
use crate::templates::FLASK_APP;
use devassist_core::{DependencySpec, ProjectRequest};
use tracing::info;

/// Creates a minimal Flask application skeleton
#[derive(Debug, Clone, Copy, Default)]
pub struct FlaskAssistant;

impl Assistant for FlaskAssistant {
    fn name(&self) -> &'static str {
        "flask"
    }

    fn fullname(&self) -> &'static str {
        "Flask"
    }

    fn usage(&self) -> &'static str {
        "Flask Assistant lets you create a Flask project."
    }

    fn dependency_spec(&self) -> DependencySpec {
        DependencySpec::new(["python-flask", "python-flask-sqlalchemy", "python-flask-wtf"])
    }

    fn run(&self, request: &ProjectRequest, tools: &Toolbox<'_>) -> Result<()> {
        let path = request.path();

        info!("Kickstarting a Flask project under {}", request.original());
        info!("Creating directory structure...");
        tools.fs.mkdir_p(path)?;
        tools.fs.mkdir_p(&path.join("static"))?;
        tools.fs.mkdir_p(&path.join("templates"))?;

        info!("Creating initial project files...");
        // The Flask template needs no rendering
        let app_module = path.join("__init__.py");
        match tools.templates.on_disk(FLASK_APP) {
            Some(source) => tools.fs.cp(&source, &app_module)?,
            None => tools
                .fs
                .write_file(&app_module, &tools.templates.source(FLASK_APP)?)?,
        }

        write_marker(self, request, tools)?;
        Ok(())
    }
}
