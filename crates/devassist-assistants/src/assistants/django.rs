//! Django project assistant

use super::{write_marker, Assistant, Toolbox};
use crate::error::{Error, Result};
use devassist_core::{DependencySpec, ProjectRequest};
use tracing::info;

/// Creates a Django project with `django-admin startproject`
#[derive(Debug, Clone, Copy, Default)]
pub struct DjangoAssistant;

impl Assistant for DjangoAssistant {
    fn name(&self) -> &'static str {
        "django"
    }

    fn fullname(&self) -> &'static str {
        "Django"
    }

    fn usage(&self) -> &'static str {
        "Django Assistant lets you create a Django project."
    }

    fn dependency_spec(&self) -> DependencySpec {
        DependencySpec::new(["python-django"])
    }

    fn run(&self, request: &ProjectRequest, tools: &Toolbox<'_>) -> Result<()> {
        let parent = request.parent();
        let name = request.name();

        info!("Creating Django project {} in {}...", name, parent);
        tools.fs.mkdir_p(parent)?;

        let admin = &tools.config.django.admin_command;
        let args = vec!["startproject".to_string(), name.to_string()];
        let output = tools.commands.run(admin, &args, Some(parent))?;
        if !output.success() {
            return Err(Error::command_failed(
                format!("{} startproject {}", admin, name),
                output.status_display(),
                output.stderr.trim(),
            ));
        }

        write_marker(self, request, tools)?;
        info!("Django project {} in {} has been created.", name, parent);
        Ok(())
    }
}
