//! Shared fakes for assistant integration tests

#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use devassist_assistants::{
    CommandOutput, CommandRunner, LocalFs, PackageManager, Result, TemplateStore, Toolbox,
};
use devassist_core::{ProjectRequest, RuntimeConfig};
use std::cell::RefCell;
use tempfile::TempDir;

/// In-memory package database
pub struct FakePackages {
    pub installed: RefCell<Vec<String>>,
    pub install_ok: bool,
    pub install_calls: RefCell<Vec<Vec<String>>>,
    pub recorded: RefCell<Vec<String>>,
}

impl FakePackages {
    pub fn with_installed(installed: &[&str]) -> Self {
        Self {
            installed: RefCell::new(installed.iter().map(|s| s.to_string()).collect()),
            install_ok: true,
            install_calls: RefCell::new(Vec::new()),
            recorded: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_installs() -> Self {
        Self {
            install_ok: false,
            ..Self::with_installed(&[])
        }
    }
}

impl PackageManager for FakePackages {
    fn is_installed(&self, package: &str) -> Result<bool> {
        Ok(self.installed.borrow().iter().any(|p| p == package))
    }

    fn install(&self, packages: &[String]) -> Result<bool> {
        self.install_calls.borrow_mut().push(packages.to_vec());
        if self.install_ok {
            self.installed.borrow_mut().extend(packages.iter().cloned());
        }
        Ok(self.install_ok)
    }

    fn record_installed(&self, package: &str) -> Result<()> {
        self.recorded.borrow_mut().push(package.to_string());
        Ok(())
    }
}

/// A recorded subprocess invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<Utf8PathBuf>,
}

/// Runner that records invocations and imitates `startproject`
pub struct RecordingRunner {
    pub exit_code: i32,
    pub calls: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self {
            exit_code: 0,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(exit_code: i32) -> Self {
        Self {
            exit_code,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String], cwd: Option<&Utf8Path>) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.map(Utf8Path::to_owned),
        });

        if self.exit_code != 0 {
            return Ok(CommandOutput {
                code: Some(self.exit_code),
                stdout: String::new(),
                stderr: "CommandError: boom\n".to_string(),
            });
        }

        if let (Some(dir), [sub, name]) = (cwd, args) {
            if sub == "startproject" {
                std::fs::create_dir_all(dir.join(name).join(name))?;
                std::fs::write(dir.join(name).join("manage.py"), "")?;
            }
        }

        Ok(CommandOutput {
            code: Some(0),
            ..Default::default()
        })
    }
}

/// Scratch directory plus fake collaborators
pub struct Harness {
    pub temp: TempDir,
    pub root: Utf8PathBuf,
    pub packages: FakePackages,
    pub runner: RecordingRunner,
    pub templates: TemplateStore,
    pub config: RuntimeConfig,
}

impl Harness {
    /// Everything installed, every command succeeds
    pub fn new() -> Self {
        Self::with(
            FakePackages::with_installed(&[
                "python-django",
                "python-flask",
                "python-flask-sqlalchemy",
                "python-flask-wtf",
                "python-setuptools",
            ]),
            RecordingRunner::succeeding(),
        )
    }

    pub fn with(packages: FakePackages, runner: RecordingRunner) -> Self {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        Self {
            temp,
            root,
            packages,
            runner,
            templates: TemplateStore::embedded(),
            config: RuntimeConfig::default(),
        }
    }

    pub fn tools(&self) -> Toolbox<'_> {
        Toolbox {
            packages: &self.packages,
            fs: &LocalFs,
            commands: &self.runner,
            templates: &self.templates,
            config: &self.config,
        }
    }

    pub fn request(&self, name: &str) -> ProjectRequest {
        ProjectRequest::from_name_in(name, &self.root).unwrap()
    }
}
