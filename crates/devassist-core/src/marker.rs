//! The `.devassistant` marker file
//!
//! Every generated project gets a small YAML record of which assistant
//! created it and with which arguments, so that later invocations can
//! find out how the project was made.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

/// Default marker file name
pub const DEFAULT_MARKER_FILE: &str = ".devassistant";

/// Generation parameters persisted in a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerFile {
    /// Version of devassist that generated the project
    pub devassistant_version: String,

    /// Assistant path from the top-level group, e.g. `[python, flask]`
    pub subassistant_path: Vec<String>,

    /// Arguments exactly as supplied by the user
    pub original_kwargs: BTreeMap<String, String>,

    /// Generation timestamp
    pub created: DateTime<Utc>,
}

impl MarkerFile {
    /// Create a marker stamped with the current crate version and time
    pub fn new(subassistant_path: Vec<String>, original_kwargs: BTreeMap<String, String>) -> Self {
        Self {
            devassistant_version: env!("CARGO_PKG_VERSION").to_string(),
            subassistant_path,
            original_kwargs,
            created: Utc::now(),
        }
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Parse from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Path of the marker inside `project_dir`
    pub fn path_in(project_dir: &Utf8Path, file_name: &str) -> Utf8PathBuf {
        project_dir.join(file_name)
    }

    /// Load the marker from `project_dir`
    pub fn load(project_dir: &Utf8Path, file_name: &str) -> Result<Self> {
        let path = Self::path_in(project_dir, file_name);
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::marker_not_found(project_dir.as_str())
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml(&content)
    }

    /// Assistant path joined for display, e.g. `python/flask`
    pub fn assistant_display(&self) -> String {
        self.subassistant_path.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> MarkerFile {
        let mut kwargs = BTreeMap::new();
        kwargs.insert("name".to_string(), "~/src/site".to_string());
        MarkerFile::new(vec!["python".to_string(), "flask".to_string()], kwargs)
    }

    #[test]
    fn test_yaml_layout() {
        let yaml = sample().to_yaml().unwrap();
        assert!(yaml.contains("devassistant_version:"));
        assert!(yaml.contains("subassistant_path:"));
        assert!(yaml.contains("- flask"));
        assert!(yaml.contains("original_kwargs:"));
        assert!(yaml.contains("created:"));
    }

    #[test]
    fn test_load_from_project_dir() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        let marker = sample();
        fs::write(dir.join(DEFAULT_MARKER_FILE), marker.to_yaml().unwrap()).unwrap();

        let loaded = MarkerFile::load(dir, DEFAULT_MARKER_FILE).unwrap();
        assert_eq!(loaded, marker);
        assert_eq!(loaded.assistant_display(), "python/flask");
    }

    #[test]
    fn test_load_missing_marker() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        let err = MarkerFile::load(dir, DEFAULT_MARKER_FILE).unwrap_err();
        assert!(matches!(err, Error::MarkerNotFound { .. }));
    }
}
