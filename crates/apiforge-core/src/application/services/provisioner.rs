//! Best-effort dependency installation.
//!
//! A failed install never fails project creation. The project tree is
//! already complete at this point; the user can rerun the command.

use std::fmt;
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::application::ports::{CommandRunner, CommandSpec};

/// Result of the install step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Installed,
    Skipped,
    Warned(ProvisionWarning),
}

impl ProvisionOutcome {
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed)
    }

    pub fn warning(&self) -> Option<&ProvisionWarning> {
        match self {
            Self::Warned(w) => Some(w),
            _ => None,
        }
    }
}

/// Why the install command did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionWarning {
    pub command: String,
    pub reason: String,
}

impl ProvisionWarning {
    pub fn suggestion(&self) -> String {
        format!("Run `{}` manually inside the project directory", self.command)
    }
}

impl fmt::Display for ProvisionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` did not complete: {}", self.command, self.reason)
    }
}

/// Runs the package manager inside a freshly written project.
pub struct DependencyProvisioner {
    runner: Box<dyn CommandRunner>,
    command: CommandSpec,
}

impl DependencyProvisioner {
    pub fn new(runner: Box<dyn CommandRunner>, command: CommandSpec) -> Self {
        Self { runner, command }
    }

    pub fn command(&self) -> &CommandSpec {
        &self.command
    }

    #[instrument(skip_all, fields(command = %self.command, root = %root.display()))]
    pub fn provision(&self, root: &Path) -> ProvisionOutcome {
        info!("installing dependencies");

        let reason = match self.runner.run(&self.command, root) {
            Ok(status) if status.success => {
                info!("dependencies installed");
                return ProvisionOutcome::Installed;
            }
            Ok(status) => match status.code {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_string(),
            },
            Err(e) => format!("could not be started: {e}"),
        };

        warn!(%reason, "dependency installation failed");
        ProvisionOutcome::Warned(ProvisionWarning {
            command: self.command.to_string(),
            reason,
        })
    }
}
