//! Core domain layer for apiforge.
//!
//! Pure logic only: no filesystem, no processes, no environment access.
//! I/O is reached through the ports defined in the application layer.
//!
//! - [`value_objects`]: the database dialect and its facts
//! - [`entities`]: project configuration, relative paths, template sets
//! - [`catalog`]: configuration → generated file set
//! - [`DomainValidator`]: consistency checks between a set and its config

pub mod catalog;
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    ProjectConfig, ProjectConfigBuilder, ProvisioningPlan, TemplateSet, common::RelativePath,
};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{Database, Dependency};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dialect_produces_a_consistent_project() {
        for database in Database::ALL {
            for auth in [true, false] {
                let config = ProjectConfig::builder()
                    .name("shop-api")
                    .database(database)
                    .auth(auth)
                    .build()
                    .unwrap();

                let set = catalog::build(&config);
                assert!(DomainValidator::validate_template_set(&set, &config).is_ok());
                assert!(set.provisioning_plan().contains("src/routes"));
            }
        }
    }

    #[test]
    fn dependency_names_match_dialect() {
        let config = ProjectConfig::builder()
            .name("shop-api")
            .database(Database::Mysql)
            .auth(false)
            .build()
            .unwrap();

        let deps = catalog::manifest::dependencies(&config);
        assert!(deps.contains_key("mysql2"));
        assert!(!deps.contains_key("pg"));
        assert!(!deps.contains_key("jsonwebtoken"));
    }
}
