//! Filesystem helpers

use crate::error::Result;
use camino::Utf8Path;
use std::fs;
use tracing::debug;

/// Filesystem operations used by the assistants
pub trait PathHelper {
    /// Whether any entry exists at `path`, including a dangling symlink
    fn path_exists(&self, path: &Utf8Path) -> bool;

    /// Create `path` and all missing parents; existing directories are fine
    fn mkdir_p(&self, path: &Utf8Path) -> Result<()>;

    /// Copy a file
    fn cp(&self, from: &Utf8Path, to: &Utf8Path) -> Result<()>;

    /// Create an empty file, leaving an existing one untouched
    fn touch(&self, path: &Utf8Path) -> Result<()>;

    /// Write `contents` to `path`, replacing any previous content
    fn write_file(&self, path: &Utf8Path, contents: &str) -> Result<()>;
}

/// [`PathHelper`] over the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl PathHelper for LocalFs {
    fn path_exists(&self, path: &Utf8Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn mkdir_p(&self, path: &Utf8Path) -> Result<()> {
        debug!("mkdir -p {}", path);
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn cp(&self, from: &Utf8Path, to: &Utf8Path) -> Result<()> {
        debug!("cp {} {}", from, to);
        fs::copy(from, to)?;
        Ok(())
    }

    fn touch(&self, path: &Utf8Path) -> Result<()> {
        debug!("touch {}", path);
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(())
    }

    fn write_file(&self, path: &Utf8Path, contents: &str) -> Result<()> {
        debug!("write {}", path);
        fs::write(path, contents)?;
        Ok(())
    }
}
