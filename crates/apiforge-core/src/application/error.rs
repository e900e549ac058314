//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Input could not be turned into a valid [`ProjectConfig`].
///
/// Every variant is detected before anything is written to disk.
///
/// [`ProjectConfig`]: crate::domain::ProjectConfig
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("No project name given")]
    MissingName,

    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Target directory already exists: {}", path.display())]
    TargetExists { path: PathBuf },

    #[error("Unsupported database '{value}'")]
    UnsupportedDatabase { value: String },

    #[error("Cancelled by user")]
    Cancelled,
}

impl ConfigError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingName => vec![
                "Pass the project name as the first argument".into(),
                "Example: apiforge my-api".into(),
            ],
            Self::InvalidName { .. } => vec![
                "Use letters, numbers, hyphens, and underscores".into(),
                "The name must not start with '.' or contain path separators".into(),
            ],
            Self::TargetExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::UnsupportedDatabase { .. } => vec![
                "Supported databases: postgres, mysql, sqlite".into(),
                "Aliases: postgresql, pg, mariadb, sqlite3".into(),
            ],
            Self::Cancelled => vec![],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName | Self::InvalidName { .. } | Self::UnsupportedDatabase { .. } => {
                ErrorCategory::Validation
            }
            Self::TargetExists { .. } => ErrorCategory::Conflict,
            Self::Cancelled => ErrorCategory::Cancelled,
        }
    }
}

/// Writing the project tree failed.
///
/// All variants except [`TargetExists`](Self::TargetExists) are reported
/// after the partially written root has been rolled back.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MaterializationError {
    #[error("Target directory already exists: {}", root.display())]
    TargetExists { root: PathBuf },

    #[error("Failed to create directory '{path}' in {}: {reason}", root.display())]
    DirectoryCreateFailed {
        root: PathBuf,
        path: String,
        reason: String,
    },

    #[error("Failed to write '{path}' in {}: {reason}", root.display())]
    FileWriteFailed {
        root: PathBuf,
        path: String,
        reason: String,
    },
}

impl MaterializationError {
    /// Project root the failure relates to.
    pub fn root(&self) -> &PathBuf {
        match self {
            Self::TargetExists { root }
            | Self::DirectoryCreateFailed { root, .. }
            | Self::FileWriteFailed { root, .. } => root,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetExists { root } => vec![
                format!("Directory already exists: {}", root.display()),
                "Choose a different project name".into(),
            ],
            Self::DirectoryCreateFailed { root, .. } | Self::FileWriteFailed { root, .. } => {
                vec![
                    "Check that you have write permissions".into(),
                    "Check available disk space".into(),
                    format!("Nothing was left behind at {}", root.display()),
                ]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } => ErrorCategory::Conflict,
            _ => ErrorCategory::Filesystem,
        }
    }
}

/// Failure reported by a [`Filesystem`](crate::application::ports::Filesystem)
/// adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{operation} failed for {}: {reason}", path.display())]
pub struct FsError {
    pub operation: &'static str,
    pub path: PathBuf,
    pub kind: io::ErrorKind,
    pub reason: String,
}

impl FsError {
    pub fn new(
        operation: &'static str,
        path: impl Into<PathBuf>,
        kind: io::ErrorKind,
        reason: impl ToString,
    ) -> Self {
        Self {
            operation,
            path: path.into(),
            kind,
            reason: reason.to_string(),
        }
    }

    pub fn from_io(operation: &'static str, path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::new(operation, path, err.kind(), err)
    }

    /// True when the operation failed because the path was already taken.
    pub fn is_already_exists(&self) -> bool {
        self.kind == io::ErrorKind::AlreadyExists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_exists_is_a_conflict() {
        let err = ConfigError::TargetExists {
            path: PathBuf::from("api"),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.to_string().contains("api"));
    }

    #[test]
    fn write_failure_keeps_root_and_path() {
        let err = MaterializationError::FileWriteFailed {
            root: PathBuf::from("/tmp/api"),
            path: "src/app.js".into(),
            reason: "disk full".into(),
        };
        assert_eq!(err.root(), &PathBuf::from("/tmp/api"));
        assert_eq!(
            err.to_string(),
            "Failed to write 'src/app.js' in /tmp/api: disk full"
        );
        assert_eq!(err.category(), ErrorCategory::Filesystem);
    }

    #[test]
    fn fs_error_keeps_io_kind() {
        let io_err = io::Error::new(io::ErrorKind::AlreadyExists, "taken");
        let err = FsError::from_io("create_dir", "/tmp/x", &io_err);
        assert!(err.is_already_exists());
        assert_eq!(err.to_string(), "create_dir failed for /tmp/x: taken");

        let denied = FsError::new("write_file", "/tmp/x", io::ErrorKind::PermissionDenied, "denied");
        assert!(!denied.is_already_exists());
    }
}
