pub mod config_resolver;
pub mod materializer;
pub mod project_service;
pub mod provisioner;

pub use config_resolver::{ConfigResolver, RawInput};
pub use materializer::{ProjectMaterializer, RootGuard};
pub use project_service::{CreatedProject, ProjectService, Stage};
pub use provisioner::{DependencyProvisioner, ProvisionOutcome, ProvisionWarning};
