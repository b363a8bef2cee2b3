//! Dependency resolution against the OS package manager

use crate::error::{Error, Result};
use crate::helpers::PackageManager;
use devassist_core::DependencySpec;
use tracing::{debug, info};

/// What dependency resolution found and did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Packages that were present before the run
    pub already_installed: Vec<String>,

    /// Packages installed by this run
    pub newly_installed: Vec<String>,
}

impl InstallReport {
    pub fn installed_anything(&self) -> bool {
        !self.newly_installed.is_empty()
    }
}

/// Make sure every package in `spec` is installed.
///
/// Missing packages are installed in a single batch, in spec order. A failed
/// install is a run error and nothing is recorded.
pub fn ensure_dependencies(
    spec: &DependencySpec,
    packages: &dyn PackageManager,
) -> Result<InstallReport> {
    let mut report = InstallReport::default();
    let mut missing = Vec::new();

    for package in spec.packages() {
        if packages.is_installed(package)? {
            report.already_installed.push(package.clone());
        } else {
            missing.push(package.clone());
        }
    }

    if missing.is_empty() {
        debug!("All dependencies present: {}", spec.packages().join(", "));
        return Ok(report);
    }

    info!("Missing dependencies: {}", missing.join(", "));
    if !packages.install(&missing)? {
        return Err(Error::run(format!("Failed to install {}", missing.join(" "))));
    }

    for package in &missing {
        packages.record_installed(package)?;
    }
    report.newly_installed = missing;

    Ok(report)
}
