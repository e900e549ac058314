use super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A forward-slash path relative to the project root.
///
/// Invariant: non-empty, never absolute, no empty or `.`/`..` segments.
/// Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path violates the invariant (use `try_new` for fallible).
    pub fn new(path: impl Into<String>) -> Self {
        match Self::try_new(path) {
            Ok(path) => path,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        let invalid = |reason: &str| DomainError::InvalidPath {
            path: path.clone(),
            reason: reason.into(),
        };

        if path.is_empty() {
            return Err(invalid("path is empty"));
        }
        if path.starts_with('/') || Path::new(&path).is_absolute() {
            return Err(invalid("absolute paths are not allowed"));
        }
        if path.contains('\\') {
            return Err(invalid("use forward slashes as separators"));
        }
        if path
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            return Err(invalid("empty, '.' and '..' segments are not allowed"));
        }

        Ok(Self(path))
    }

    /// All proper ancestors, outermost first (`a`, `a/b` for `a/b/c`).
    pub fn ancestors(&self) -> impl Iterator<Item = RelativePath> + '_ {
        self.0
            .match_indices('/')
            .map(|(idx, _)| RelativePath(self.0[..idx].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against a platform root directory.
    pub fn to_path(&self, root: &Path) -> PathBuf {
        self.0
            .split('/')
            .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
