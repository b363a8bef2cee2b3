//! # devassist-assistants
//!
//! Python project assistants for the devassist CLI:
//! - Django, Flask and library scaffolding
//! - OS dependency resolution through the package manager
//! - Embedded, overridable Tera templates
//!
//! # Examples
//!
//! ```no_run
//! use devassist_assistants::{
//!     workflow, AssistantKind, LocalFs, Outcome, RpmPackageManager, SystemRunner, TemplateStore,
//!     Toolbox,
//! };
//! use devassist_core::RuntimeConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RuntimeConfig::default();
//! let packages = RpmPackageManager::new(config.packages.clone());
//! let templates = TemplateStore::from_config(&config);
//! let tools = Toolbox {
//!     packages: &packages,
//!     fs: &LocalFs,
//!     commands: &SystemRunner,
//!     templates: &templates,
//!     config: &config,
//! };
//!
//! match workflow::execute(AssistantKind::Library, "~/src/mylib", &tools)? {
//!     Outcome::Created(project) => println!("created {}", project.path),
//!     Outcome::Rejected { errors } => eprintln!("{}", errors.join("\n")),
//! }
//! # Ok(())
//! # }
//! ```

pub mod assistants;
pub mod dependencies;
pub mod error;
pub mod helpers;
pub mod templates;
pub mod workflow;

pub use assistants::{Assistant, AssistantKind, Toolbox, GROUP_FULLNAME, GROUP_NAME};
pub use dependencies::{ensure_dependencies, InstallReport};
pub use error::{Error, Result};
pub use helpers::{
    CommandOutput, CommandRunner, LocalFs, PackageManager, PathHelper, RpmPackageManager,
    SystemRunner,
};
pub use templates::{TemplateRenderer, TemplateStore, TemplateVars};
pub use workflow::{CreatedProject, Outcome};
