//! apiforge core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for apiforge, a
//! generator of Express + Sequelize REST API projects.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          apiforge-cli (CLI)             │
//! │   flags, prompts, config, exit codes    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ProjectService → ConfigResolver,       │
//! │  ProjectMaterializer, Provisioner       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │       Filesystem, CommandRunner         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    apiforge-adapters (Infrastructure)   │
//! │  LocalFilesystem, SystemCommandRunner   │
//! └─────────────────────────────────────────┘
//!
//!   Domain (pure): Database, ProjectConfig, TemplateSet, catalog
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use apiforge_core::prelude::*;
//!
//! # fn run(fs: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) -> ForgeResult<()> {
//! let provisioner = DependencyProvisioner::new(runner, CommandSpec::default());
//! let service = ProjectService::new(fs, provisioner, ".");
//!
//! let created = service.create_project(RawInput::named("my-api").database("mysql"))?;
//! println!("{} files in {}", created.files_written, created.root.display());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        CommandRunner, CommandSpec, CommandStatus, ConfigError, CreatedProject,
        DependencyProvisioner, Filesystem, FsError, MaterializationError, ProjectService,
        ProvisionOutcome, ProvisionWarning, RawInput, Stage,
    };
    pub use crate::domain::{Database, ProjectConfig, TemplateSet};
    pub use crate::error::{ErrorCategory, ForgeError, ForgeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
