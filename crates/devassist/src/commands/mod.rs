//! CLI command implementations

pub mod config;
pub mod inspect;
pub mod list;
pub mod python;

use anyhow::{Context, Result};
use camino::Utf8Path;
use devassist_core::{HierarchicalConfigLoader, RuntimeConfig};
use tracing::debug;

/// Load the runtime configuration, honouring an explicit `--config` path
pub(crate) fn load_config(path: Option<&Utf8Path>) -> Result<RuntimeConfig> {
    let loader = HierarchicalConfigLoader::new().context("Failed to locate configuration")?;
    let config = loader.load(path).context("Failed to load configuration")?;
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
