//! Collaborators the assistants drive: package manager, filesystem and
//! subprocesses.
//!
//! Each is a trait so the workflow can be exercised without touching the
//! host system.

mod packages;
mod path;
mod process;

pub use packages::{PackageManager, RpmPackageManager};
pub use path::{LocalFs, PathHelper};
pub use process::{CommandOutput, CommandRunner, SystemRunner};
