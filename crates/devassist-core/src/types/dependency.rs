//! Package dependency lists for assistants

use serde::{Deserialize, Serialize};

/// Ordered set of OS package names an assistant needs before it can run
///
/// Duplicates are dropped on construction; the first occurrence keeps its
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencySpec {
    packages: Vec<String>,
}

impl DependencySpec {
    /// Build a spec from package names
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut spec = Self::default();
        for package in packages {
            spec.push(package);
        }
        spec
    }

    /// Append a package unless it is already listed
    pub fn push(&mut self, package: impl Into<String>) {
        let package = package.into();
        if !self.packages.contains(&package) {
            self.packages.push(package);
        }
    }

    /// Package names in order
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }
}
