//! Infrastructure adapters for apiforge.
//!
//! This crate implements the ports defined in `apiforge-core::application::ports`.
//! It contains all I/O: the local filesystem and child processes, plus
//! in-memory doubles of both for tests.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{Invocation, ScriptedRunner, SystemCommandRunner};
