//! Project request built from the user-supplied `--name`

use crate::error::{Error, Result};
use crate::utils::{absolutize, current_dir, expand_user};
use camino::{Utf8Path, Utf8PathBuf};

/// A request to create a project at a resolved location
///
/// The supplied name may be a bare name, a relative path or an absolute
/// path. It is `~`-expanded, made absolute against the working directory
/// and lexically normalized; the final component becomes the project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    /// Name exactly as supplied on the command line
    original: String,

    /// Absolute, normalized project path
    path: Utf8PathBuf,

    /// Basename of `path`
    name: String,
}

impl ProjectRequest {
    /// Resolve `name` against the current working directory
    pub fn from_name(name: &str) -> Result<Self> {
        let cwd = current_dir()?;
        Self::from_name_in(name, &cwd)
    }

    /// Resolve `name` against an explicit base directory
    pub fn from_name_in(name: &str, base: &Utf8Path) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::invalid_project_name(name));
        }

        let expanded = expand_user(name)?;
        let path = absolutize(&expanded, base);

        let project_name = path
            .file_name()
            .ok_or_else(|| Error::invalid_project_name(name))?
            .to_string();

        Ok(Self {
            original: name.to_string(),
            path,
            name: project_name,
        })
    }

    /// Name as originally supplied
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Absolute project path
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Project name (basename of the path)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the project is created in
    pub fn parent(&self) -> &Utf8Path {
        // Always present: `from_name_in` rejects paths without a file name
        self.path.parent().unwrap_or(Utf8Path::new("/"))
    }
}
