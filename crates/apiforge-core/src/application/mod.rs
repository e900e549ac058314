//! Application layer for apiforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService and the steps it runs)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ConfigResolver, CreatedProject, DependencyProvisioner, ProjectMaterializer, ProjectService,
    ProvisionOutcome, ProvisionWarning, RawInput, RootGuard, Stage,
};

pub use ports::{CommandRunner, CommandSpec, CommandStatus, Filesystem};

pub use error::{ConfigError, FsError, MaterializationError};
