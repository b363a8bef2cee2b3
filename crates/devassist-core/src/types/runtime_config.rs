//! Runtime configuration types
//!
//! These control which external tools the assistants drive and where
//! templates are read from.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Complete runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Directory whose files take precedence over the embedded templates
    #[serde(default)]
    pub template_dir: Option<Utf8PathBuf>,

    /// Name of the marker file written into every created project
    #[serde(default = "default_marker_file")]
    pub marker_file: String,

    /// OS package manager commands
    #[serde(default)]
    pub packages: PackageManagerConfig,

    /// Django project generator settings
    #[serde(default)]
    pub django: DjangoConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            template_dir: None,
            marker_file: default_marker_file(),
            packages: PackageManagerConfig::default(),
            django: DjangoConfig::default(),
        }
    }
}

/// OS package manager configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageManagerConfig {
    /// Command used to query installed packages (`<cmd> -q <pkg>`)
    #[serde(default = "default_query_command")]
    pub query_command: String,

    /// Command used to install packages (`<cmd> install <pkgs>`)
    #[serde(default = "default_install_command")]
    pub install_command: String,

    /// Privilege escalation wrapper for installs; `None` runs unwrapped
    #[serde(default = "default_escalate")]
    pub escalate: Option<String>,

    /// Pass `-y` to the installer
    #[serde(default = "default_true")]
    pub assume_yes: bool,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            query_command: default_query_command(),
            install_command: default_install_command(),
            escalate: default_escalate(),
            assume_yes: true,
        }
    }
}

/// Django assistant configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DjangoConfig {
    /// Project generator binary
    #[serde(default = "default_django_admin")]
    pub admin_command: String,
}

impl Default for DjangoConfig {
    fn default() -> Self {
        Self {
            admin_command: default_django_admin(),
        }
    }
}

fn default_marker_file() -> String {
    ".devassistant".to_string()
}

fn default_query_command() -> String {
    "rpm".to_string()
}

fn default_install_command() -> String {
    "yum".to_string()
}

fn default_escalate() -> Option<String> {
    Some("sudo".to_string())
}

fn default_django_admin() -> String {
    "django-admin".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
packages:
  install-command: dnf
django:
  admin-command: django-admin.py
"#;
        let config: RuntimeConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.packages.install_command, "dnf");
        assert_eq!(config.packages.query_command, "rpm");
        assert_eq!(config.packages.escalate.as_deref(), Some("sudo"));
        assert!(config.packages.assume_yes);
        assert_eq!(config.django.admin_command, "django-admin.py");
        assert_eq!(config.marker_file, ".devassistant");
        assert!(config.template_dir.is_none());
    }

    #[test]
    fn test_null_escalate_disables_wrapper() {
        let yaml = "packages:\n  escalate: null\n";
        let config: RuntimeConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.packages.escalate, None);
    }
}
