//! Template rendering with Tera for variable substitution.

use crate::error::Result;
use camino::Utf8PathBuf;
use std::collections::BTreeMap;

/// Template variables for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVars {
    vars: BTreeMap<String, String>,
}

impl TemplateVars {
    /// Create an empty variable set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Look up a variable
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Convert into a Tera context
    pub fn to_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.vars {
            context.insert(key, value);
        }
        context
    }
}

/// Source of named templates
///
/// Template names are relative paths such as `python/lib/setup.py`.
pub trait TemplateRenderer {
    /// Render `template` with `vars` substituted
    fn render(&self, template: &str, vars: &TemplateVars) -> Result<String>;

    /// Raw, unrendered template text
    fn source(&self, template: &str) -> Result<String>;

    /// Location of the template on disk, if it is not only embedded
    fn on_disk(&self, template: &str) -> Option<Utf8PathBuf>;
}

/// Render template text once under `name`
pub(crate) fn render_text(name: &str, text: &str, vars: &TemplateVars) -> Result<String> {
    let mut tera = tera::Tera::default();
    tera.add_raw_template(name, text)?;
    Ok(tera.render(name, &vars.to_context())?)
}
