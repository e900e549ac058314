//! Scripted command runner for tests.

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use apiforge_core::application::ports::{CommandRunner, CommandSpec, CommandStatus};

/// A recorded call to [`ScriptedRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub cwd: PathBuf,
}

#[derive(Debug, Clone)]
enum Reply {
    Exit(CommandStatus),
    SpawnError(io::ErrorKind),
}

/// Replays queued outcomes and records every invocation.
///
/// When the queue is empty, runs succeed. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    replies: VecDeque<Reply>,
    calls: Vec<Invocation>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a process exit with `code`.
    pub fn then_exit(self, code: i32) -> Self {
        self.lock()
            .replies
            .push_back(Reply::Exit(CommandStatus::exited(code)));
        self
    }

    /// Queue a termination by signal.
    pub fn then_signal(self) -> Self {
        self.lock()
            .replies
            .push_back(Reply::Exit(CommandStatus::signalled()));
        self
    }

    /// Queue a failure to start the process.
    pub fn then_fail_to_spawn(self, kind: io::ErrorKind) -> Self {
        self.lock().replies.push_back(Reply::SpawnError(kind));
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> io::Result<CommandStatus> {
        let mut state = self.lock();
        state.calls.push(Invocation {
            command: command.to_string(),
            cwd: cwd.to_path_buf(),
        });

        match state.replies.pop_front() {
            None => Ok(CommandStatus::success()),
            Some(Reply::Exit(status)) => Ok(status),
            Some(Reply::SpawnError(kind)) => Err(io::Error::new(
                kind,
                format!("{}: cannot start", command.program),
            )),
        }
    }
}
