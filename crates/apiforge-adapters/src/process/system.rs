//! Command runner backed by `std::process`.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use apiforge_core::application::ports::{CommandRunner, CommandSpec, CommandStatus};
use tracing::debug;

/// Runs commands as child processes, blocking until they exit.
///
/// All three standard streams are connected to the null device, so the
/// child cannot prompt or interleave output with the CLI's own rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> io::Result<CommandStatus> {
        debug!(%command, cwd = %cwd.display(), "spawning");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        debug!(code = ?status.code(), "process exited");
        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_a_spawn_error() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("apiforge-definitely-not-installed", ["install"]);
        assert!(SystemCommandRunner::new().run(&spec, tmp.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn exit_codes_are_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = SystemCommandRunner::new();

        let ok = runner.run(&CommandSpec::new("true", Vec::<String>::new()), tmp.path());
        assert_eq!(ok.unwrap(), CommandStatus::exited(0));

        let failed = runner
            .run(&CommandSpec::new("sh", ["-c", "exit 3"]), tmp.path())
            .unwrap();
        assert_eq!(failed, CommandStatus::exited(3));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_requested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("sh", ["-c", "touch marker"]);
        SystemCommandRunner::new().run(&spec, tmp.path()).unwrap();
        assert!(tmp.path().join("marker").exists());
    }
}
