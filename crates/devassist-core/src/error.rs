//! Error types for devassist-core

use thiserror::Error;

/// Result type alias using devassist-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for devassist
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// Project name that does not resolve to a usable directory name
    #[error("Invalid project name: {name}. It must end in a directory name")]
    InvalidProjectName { name: String },

    /// Path that cannot be represented or resolved
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Marker file missing from a project directory
    #[error("No devassist marker file found in {path}")]
    MarkerNotFound { path: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create a marker not found error
    pub fn marker_not_found(path: impl Into<String>) -> Self {
        Self::MarkerNotFound { path: path.into() }
    }
}
