//! Template loading from embedded assets and an optional override directory.
//!
//! Lookup order for a template name:
//! 1. `<template_dir>/<name>` when a template directory is configured
//! 2. The copy embedded in the binary

use super::renderer::{render_text, TemplateRenderer, TemplateVars};
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use devassist_core::RuntimeConfig;
use rust_embed::RustEmbed;
use std::fs;
use tracing::debug;

/// Templates shipped with devassist
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/"]
struct EmbeddedTemplates;

/// Template store with a user override directory
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    override_dir: Option<Utf8PathBuf>,
}

impl TemplateStore {
    /// Store serving only the embedded templates
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Store preferring files below `dir`
    pub fn with_override_dir(dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    /// Store configured from the runtime configuration
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            override_dir: config.template_dir.clone(),
        }
    }

    /// Override directory, if any
    pub fn override_dir(&self) -> Option<&Utf8Path> {
        self.override_dir.as_deref()
    }

    /// Names of all embedded templates
    pub fn embedded_names() -> Vec<String> {
        let mut names: Vec<String> = EmbeddedTemplates::iter().map(|n| n.to_string()).collect();
        names.sort();
        names
    }
}

impl TemplateRenderer for TemplateStore {
    fn render(&self, template: &str, vars: &TemplateVars) -> Result<String> {
        let text = self.source(template)?;
        debug!("Rendering template {}", template);
        render_text(template, &text, vars)
    }

    fn source(&self, template: &str) -> Result<String> {
        if let Some(path) = self.on_disk(template) {
            debug!("Using template override {}", path);
            return Ok(fs::read_to_string(&path)?);
        }

        let file =
            EmbeddedTemplates::get(template).ok_or_else(|| Error::template_not_found(template))?;
        String::from_utf8(file.data.into_owned()).map_err(|_| Error::TemplateEncoding {
            template: template.to_string(),
        })
    }

    fn on_disk(&self, template: &str) -> Option<Utf8PathBuf> {
        let path = self.override_dir.as_ref()?.join(template);
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_templates_present() {
        let names = TemplateStore::embedded_names();
        assert!(names.contains(&"python/flask".to_string()));
        assert!(names.contains(&"python/lib/setup.py".to_string()));
    }

    #[test]
    fn test_render_embedded_setup_py() {
        let store = TemplateStore::embedded();
        let vars = TemplateVars::new().with("name", "myproj");
        let rendered = store.render("python/lib/setup.py", &vars).unwrap();
        assert!(rendered.contains("name='myproj'"));
        assert!(rendered.contains("find_packages()"));
        assert!(store.on_disk("python/lib/setup.py").is_none());
    }

    #[test]
    fn test_unknown_template() {
        let err = TemplateStore::embedded().source("python/nope").unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }

    #[test]
    fn test_override_dir_takes_precedence() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        fs::create_dir_all(dir.join("python/lib")).unwrap();
        fs::write(dir.join("python/lib/setup.py"), "custom {{ name }}").unwrap();

        let store = TemplateStore::with_override_dir(dir.clone());
        let vars = TemplateVars::new().with("name", "lib1");
        assert_eq!(store.render("python/lib/setup.py", &vars).unwrap(), "custom lib1");
        assert_eq!(
            store.on_disk("python/lib/setup.py"),
            Some(dir.join("python/lib/setup.py"))
        );

        // Templates missing from the override dir fall back to the embedded copy
        assert!(store.on_disk("python/flask").is_none());
        assert!(store.source("python/flask").unwrap().contains("Flask(__name__)"));
    }
}
