//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `apiforge-adapters` crate provides implementations.

use std::fmt;
use std::io;
use std::path::Path;

use crate::application::error::FsError;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `apiforge_adapters::filesystem::LocalFilesystem` (production)
/// - `apiforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a single directory. Fails with `AlreadyExists` if the path is
    /// taken, and when the parent is missing.
    fn create_dir(&self, path: &Path) -> Result<(), FsError>;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError>;

    /// Write UTF-8 content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> Result<(), FsError>;
}

/// An external command: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for CommandSpec {
    fn default() -> Self {
        Self::new("npm", ["install"])
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a finished command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn exited(code: i32) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
        }
    }

    pub fn signalled() -> Self {
        Self {
            success: false,
            code: None,
        }
    }
}

/// Port for running external commands.
///
/// Implemented by:
/// - `apiforge_adapters::process::SystemCommandRunner` (production)
/// - `apiforge_adapters::process::ScriptedRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command` in `cwd` and block until it exits.
    ///
    /// An `Err` means the process could not be started at all.
    fn run(&self, command: &CommandSpec, cwd: &Path) -> io::Result<CommandStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_is_npm_install() {
        assert_eq!(CommandSpec::default().to_string(), "npm install");
    }

    #[test]
    fn display_joins_args() {
        let spec = CommandSpec::new("pnpm", ["install", "--frozen-lockfile"]);
        assert_eq!(spec.to_string(), "pnpm install --frozen-lockfile");
        assert_eq!(CommandSpec::new("yarn", Vec::<String>::new()).to_string(), "yarn");
    }

    #[test]
    fn exit_status_helpers() {
        assert!(CommandStatus::exited(0).success);
        assert!(!CommandStatus::exited(1).success);
        assert_eq!(CommandStatus::signalled().code, None);
    }
}
