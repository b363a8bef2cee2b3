//! Type definitions for devassist requests and configuration

mod dependency;
mod request;
mod runtime_config;

pub use dependency::DependencySpec;
pub use request::ProjectRequest;
pub use runtime_config::*;
