pub mod common;
pub mod project_config;
pub mod template_set;

pub use crate::domain::DomainError;
pub use project_config::{ProjectConfig, ProjectConfigBuilder};
pub use template_set::{ProvisioningPlan, TemplateSet};
