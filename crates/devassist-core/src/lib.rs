//! # devassist-core
//!
//! Core library for the devassist CLI providing:
//! - Runtime configuration (embedded defaults, user file, environment)
//! - Project requests resolved from user-supplied names
//! - Dependency specs for OS packages
//! - The `.devassistant` marker file written into generated projects

pub mod config;
pub mod error;
pub mod marker;
pub mod types;
pub mod utils;

pub use config::HierarchicalConfigLoader;
pub use error::{Error, Result};
pub use marker::MarkerFile;
pub use types::{DependencySpec, ProjectRequest, RuntimeConfig};
pub use utils::get_home_dir;
