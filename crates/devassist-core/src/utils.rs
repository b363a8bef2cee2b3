//! Shared utility functions for devassist crates

use crate::error::{Error, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that
/// overriding HOME (tests, containers, sudo -E) is respected.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Ok(Utf8PathBuf::from(home));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?;
    Utf8PathBuf::from_path_buf(home)
        .map_err(|p| Error::invalid_path(p.to_string_lossy().into_owned()))
}

/// Get the devassist configuration directory (~/.devassistant)
pub fn get_devassist_dir() -> Result<Utf8PathBuf> {
    Ok(get_home_dir()?.join(".devassistant"))
}

/// Get the current working directory as a UTF-8 path
pub fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|p| Error::invalid_path(p.to_string_lossy().into_owned()))
}

/// Expand a leading `~` or `~/` to the home directory.
///
/// `~user` forms are left untouched.
pub fn expand_user(path: &str) -> Result<Utf8PathBuf> {
    if path == "~" {
        return get_home_dir();
    }

    match path.strip_prefix("~/") {
        Some(rest) => Ok(get_home_dir()?.join(rest)),
        None => Ok(Utf8PathBuf::from(path)),
    }
}

/// Make `path` absolute against `base` and resolve `.` and `..` lexically.
///
/// Symlinks are not followed, and `..` at the root stays at the root.
pub fn absolutize(path: &Utf8Path, base: &Utf8Path) -> Utf8PathBuf {
    let joined = if path.is_absolute() {
        path.to_owned()
    } else {
        base.join(path)
    };

    let mut normalized = Utf8PathBuf::new();
    for component in joined.components() {
        match component {
            Utf8Component::Prefix(p) => normalized.push(p.as_str()),
            Utf8Component::RootDir => normalized.push("/"),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                normalized.pop();
            }
            Utf8Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}
