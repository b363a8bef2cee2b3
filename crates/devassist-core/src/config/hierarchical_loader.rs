//! Hierarchical configuration loading
//!
//! Precedence, lowest to highest:
//! 1. Embedded defaults (`devassist-defaults.yaml`, compiled into the binary)
//! 2. User config file (`~/.devassistant/config.yaml` or an explicit path)
//! 3. `DEVASSIST_*` environment variables

use crate::error::{Error, Result};
use crate::types::RuntimeConfig;
use crate::utils::get_devassist_dir;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::{Mapping, Value};
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/embedded/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "devassist-defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for the user configuration file
    config_dir: Utf8PathBuf,
}

impl HierarchicalConfigLoader {
    /// Create a loader rooted at ~/.devassistant
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_dir: get_devassist_dir()?,
        })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// Load the runtime configuration
    ///
    /// An explicit `path` must exist; the default user file is optional.
    pub fn load(&self, path: Option<&Utf8Path>) -> Result<RuntimeConfig> {
        let mut merged = Self::load_embedded_defaults()?;

        let user_file = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(Error::config_not_found(p.as_str()));
                }
                Some(p.to_owned())
            }
            None => {
                let default_path = self.config_dir.join(USER_CONFIG_FILE);
                default_path.exists().then_some(default_path)
            }
        };

        if let Some(file) = user_file {
            debug!("Loading user configuration from {}", file);
            let overlay = Self::load_yaml_file(&file)?;
            merge_values(&mut merged, overlay);
        }

        let config: RuntimeConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to parse configuration: {}", e)))?;

        Ok(Self::apply_env_overrides(config))
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    fn load_embedded_defaults() -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(DEFAULTS_FILE).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", DEFAULTS_FILE))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", DEFAULTS_FILE))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                DEFAULTS_FILE, e
            ))
        })
    }

    fn load_yaml_file(path: &Utf8Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;

        // An empty file parses as null
        match value {
            Value::Null => Ok(Value::Mapping(Mapping::new())),
            Value::Mapping(_) => Ok(value),
            _ => Err(Error::invalid_config(format!(
                "{} must contain a YAML mapping",
                path
            ))),
        }
    }

    fn apply_env_overrides(mut config: RuntimeConfig) -> RuntimeConfig {
        if let Ok(val) = env::var("DEVASSIST_TEMPLATE_DIR") {
            config.template_dir = (!val.is_empty()).then(|| Utf8PathBuf::from(val));
        }

        if let Ok(val) = env::var("DEVASSIST_PKG_QUERY") {
            config.packages.query_command = val;
        }

        if let Ok(val) = env::var("DEVASSIST_PKG_INSTALL") {
            config.packages.install_command = val;
        }

        if let Ok(val) = env::var("DEVASSIST_PKG_ESCALATE") {
            config.packages.escalate = (!val.is_empty()).then_some(val);
        }

        if let Ok(val) = env::var("DEVASSIST_DJANGO_ADMIN") {
            config.django.admin_command = val;
        }

        config
    }
}

/// Recursively merge `overlay` into `base`; mappings merge key by key,
/// everything else is replaced.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    const ENV_VARS: &[&str] = &[
        "DEVASSIST_TEMPLATE_DIR",
        "DEVASSIST_PKG_QUERY",
        "DEVASSIST_PKG_INSTALL",
        "DEVASSIST_PKG_ESCALATE",
        "DEVASSIST_DJANGO_ADMIN",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            env::remove_var(var);
        }
    }

    fn create_temp_loader() -> (HierarchicalConfigLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_dir =
            Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("Invalid UTF-8 path");
        let loader = HierarchicalConfigLoader::with_dir(config_dir);
        (loader, temp_dir)
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();
        let (loader, _temp) = create_temp_loader();
        let config = loader.load(None).unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    #[serial]
    fn test_user_file_merges_over_defaults() {
        clear_env();
        let (loader, _temp) = create_temp_loader();
        fs::write(
            loader.config_dir().join("config.yaml"),
            "template-dir: /opt/templates\npackages:\n  install-command: dnf\n",
        )
        .unwrap();

        let config = loader.load(None).unwrap();
        assert_eq!(config.template_dir.as_deref(), Some(Utf8Path::new("/opt/templates")));
        assert_eq!(config.packages.install_command, "dnf");
        assert_eq!(config.packages.query_command, "rpm");
        assert_eq!(config.packages.escalate.as_deref(), Some("sudo"));
    }

    #[test]
    #[serial]
    fn test_empty_user_file() {
        clear_env();
        let (loader, _temp) = create_temp_loader();
        fs::write(loader.config_dir().join("config.yaml"), "").unwrap();
        assert_eq!(loader.load(None).unwrap(), RuntimeConfig::default());
    }

    #[test]
    #[serial]
    fn test_explicit_path_must_exist() {
        clear_env();
        let (loader, temp) = create_temp_loader();
        let missing = Utf8PathBuf::from_path_buf(temp.path().join("nope.yaml")).unwrap();
        let err = loader.load(Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    #[serial]
    fn test_non_mapping_file_rejected() {
        clear_env();
        let (loader, _temp) = create_temp_loader();
        let path = loader.config_dir().join("list.yaml");
        fs::write(&path, "- a\n- b\n").unwrap();
        let err = loader.load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    #[serial]
    fn test_env_overrides_win() {
        clear_env();
        let (loader, _temp) = create_temp_loader();
        fs::write(
            loader.config_dir().join("config.yaml"),
            "django:\n  admin-command: from-file\n",
        )
        .unwrap();

        env::set_var("DEVASSIST_DJANGO_ADMIN", "from-env");
        env::set_var("DEVASSIST_PKG_ESCALATE", "");
        env::set_var("DEVASSIST_TEMPLATE_DIR", "/srv/tpl");

        let config = loader.load(None).unwrap();
        clear_env();

        assert_eq!(config.django.admin_command, "from-env");
        assert_eq!(config.packages.escalate, None);
        assert_eq!(config.template_dir.as_deref(), Some(Utf8Path::new("/srv/tpl")));
    }
}
