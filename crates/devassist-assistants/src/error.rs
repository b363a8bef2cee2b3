//! Error types for devassist-assistants

use thiserror::Error;

/// Result type alias using devassist-assistants's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Assistant error types
#[derive(Error, Debug)]
pub enum Error {
    /// Assistant run aborted (dependency install failure and similar)
    #[error("{message}")]
    Run { message: String },

    /// Unknown assistant name
    #[error("Unknown assistant: {name}. Available assistants: {available}")]
    UnknownAssistant { name: String, available: String },

    /// External command not found on PATH
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// External command exited unsuccessfully
    #[error("Command '{command}' failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Template not found in the override directory or embedded set
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// Template is not valid UTF-8
    #[error("Template is not valid UTF-8: {template}")]
    TemplateEncoding { template: String },

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error(transparent)]
    Core(#[from] devassist_core::Error),
}

impl Error {
    /// Create a run error
    pub fn run(message: impl Into<String>) -> Self {
        Self::Run {
            message: message.into(),
        }
    }

    /// Create an unknown assistant error
    pub fn unknown_assistant(name: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownAssistant {
            name: name.into(),
            available: available.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
        }
    }

    /// Whether this is an assistant run error
    pub fn is_run(&self) -> bool {
        matches!(self, Self::Run { .. })
    }
}
