//! OS package manager access
//!
//! The default implementation queries with `rpm -q` and installs with
//! `sudo yum install -y`; all three commands come from
//! [`PackageManagerConfig`].

use super::process::{CommandOutput, CommandRunner, SystemRunner};
use crate::error::Result;
use devassist_core::types::PackageManagerConfig;
use tracing::{debug, info, warn};

/// Query and install OS packages
pub trait PackageManager {
    /// Whether `package` is currently installed
    fn is_installed(&self, package: &str) -> Result<bool>;

    /// Install all `packages` in one transaction; `Ok(false)` when the
    /// package manager reports failure
    fn install(&self, packages: &[String]) -> Result<bool>;

    /// Note that `package` was installed during this run
    fn record_installed(&self, package: &str) -> Result<()>;
}

/// RPM/YUM backed [`PackageManager`]
#[derive(Debug, Clone)]
pub struct RpmPackageManager<R = SystemRunner> {
    config: PackageManagerConfig,
    runner: R,
}

impl RpmPackageManager<SystemRunner> {
    /// Create a package manager that spawns real processes
    pub fn new(config: PackageManagerConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> RpmPackageManager<R> {
    /// Create a package manager driving commands through `runner`
    pub fn with_runner(config: PackageManagerConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Program and arguments for installing `packages`
    fn install_command(&self, packages: &[String]) -> (String, Vec<String>) {
        let mut args = Vec::new();
        let program = match &self.config.escalate {
            Some(wrapper) => {
                args.push(self.config.install_command.clone());
                wrapper.clone()
            }
            None => self.config.install_command.clone(),
        };

        args.push("install".to_string());
        if self.config.assume_yes {
            args.push("-y".to_string());
        }
        args.extend(packages.iter().cloned());

        (program, args)
    }

    fn query(&self, package: &str) -> Result<CommandOutput> {
        let args = vec!["-q".to_string(), package.to_string()];
        self.runner.run(&self.config.query_command, &args, None)
    }
}

impl<R: CommandRunner> PackageManager for RpmPackageManager<R> {
    fn is_installed(&self, package: &str) -> Result<bool> {
        let installed = self.query(package)?.success();
        debug!(
            "Package {} is {}installed",
            package,
            if installed { "" } else { "not " }
        );
        Ok(installed)
    }

    fn install(&self, packages: &[String]) -> Result<bool> {
        let (program, args) = self.install_command(packages);
        info!("Installing {}...", packages.join(" "));

        let output = self.runner.run(&program, &args, None)?;
        if !output.success() {
            warn!(
                "{} {} failed ({}): {}",
                program,
                args.join(" "),
                output.status_display(),
                output.stderr.trim()
            );
        }
        Ok(output.success())
    }

    fn record_installed(&self, package: &str) -> Result<()> {
        let output = self.query(package)?;
        if output.success() {
            info!("Installed {}", output.stdout.trim());
        } else {
            warn!("{} was installed but is not reported by the package database", package);
        }
        Ok(())
    }
}
