//! Turns raw, unvalidated input into a [`ProjectConfig`].

use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::{
    application::{error::ConfigError, ports::Filesystem},
    domain::{Database, DomainError, DomainValidator, ProjectConfig},
};

/// Unvalidated union of CLI flags, prompt answers and config defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub name: Option<String>,
    pub database: Option<String>,
    pub auth_enabled: Option<bool>,
    pub install_deps: Option<bool>,
}

impl RawInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn auth(mut self, enabled: bool) -> Self {
        self.auth_enabled = Some(enabled);
        self
    }

    pub fn install(mut self, install: bool) -> Self {
        self.install_deps = Some(install);
        self
    }
}

/// Validates and normalizes [`RawInput`].
///
/// The only I/O performed is the existence check of `base_dir/name`.
pub struct ConfigResolver<'a> {
    fs: &'a dyn Filesystem,
    base_dir: PathBuf,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(fs: &'a dyn Filesystem, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[instrument(skip_all, fields(name = raw.name.as_deref().unwrap_or("")))]
    pub fn resolve(&self, raw: RawInput) -> Result<ProjectConfig, ConfigError> {
        let name = raw
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ConfigError::MissingName)?;

        DomainValidator::validate_project_name(name).map_err(|e| invalid_name(name, e))?;

        let database = match raw.database.as_deref() {
            Some(value) => value
                .parse::<Database>()
                .map_err(|_| ConfigError::UnsupportedDatabase {
                    value: value.to_string(),
                })?,
            None => Database::default(),
        };
        debug!(%database, "database resolved");

        let target = self.base_dir.join(name);
        if self.fs.exists(&target) {
            return Err(ConfigError::TargetExists { path: target });
        }

        let config = ProjectConfig::builder()
            .name(name)
            .database(database)
            .auth(raw.auth_enabled.unwrap_or(true))
            .install_deps(raw.install_deps.unwrap_or(true))
            .build()
            .map_err(|e| invalid_name(name, e))?;

        debug!(%config, "configuration resolved");
        Ok(config)
    }
}

fn invalid_name(name: &str, err: DomainError) -> ConfigError {
    match err {
        DomainError::InvalidProjectName { name, reason } => ConfigError::InvalidName { name, reason },
        other => ConfigError::InvalidName {
            name: name.to_string(),
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    fn free_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs
    }

    #[test]
    fn applies_defaults() {
        let fs = free_fs();
        let config = ConfigResolver::new(&fs, "/work")
            .resolve(RawInput::named("api"))
            .unwrap();

        assert_eq!(config.name(), "api");
        assert_eq!(config.database(), Database::Postgres);
        assert!(config.auth_enabled());
        assert!(config.install_deps());
    }

    #[test]
    fn explicit_values_win() {
        let fs = free_fs();
        let config = ConfigResolver::new(&fs, "/work")
            .resolve(RawInput::named("api1").database("MySQL").auth(false).install(false))
            .unwrap();

        assert_eq!(config.database(), Database::Mysql);
        assert!(!config.auth_enabled());
        assert!(!config.install_deps());
    }

    #[test]
    fn missing_or_blank_name() {
        let fs = free_fs();
        let resolver = ConfigResolver::new(&fs, "/work");
        assert_eq!(resolver.resolve(RawInput::default()), Err(ConfigError::MissingName));
        assert_eq!(resolver.resolve(RawInput::named("   ")), Err(ConfigError::MissingName));
    }

    #[test]
    fn invalid_names_are_rejected() {
        let fs = free_fs();
        let resolver = ConfigResolver::new(&fs, "/work");
        for name in ["..", ".hidden", "a/b", "a\\b"] {
            assert!(
                matches!(resolver.resolve(RawInput::named(name)), Err(ConfigError::InvalidName { .. })),
                "{name}"
            );
        }
    }

    #[test]
    fn unknown_database_is_rejected() {
        let fs = free_fs();
        let err = ConfigResolver::new(&fs, "/work")
            .resolve(RawInput::named("api").database("oracle"))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedDatabase {
                value: "oracle".into()
            }
        );
    }

    #[test]
    fn existing_target_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/work/api"))
            .times(1)
            .return_const(true);

        let err = ConfigResolver::new(&fs, "/work")
            .resolve(RawInput::named("api"))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::TargetExists {
                path: PathBuf::from("/work/api")
            }
        );
    }

    #[test]
    fn invalid_input_never_touches_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();

        let resolver = ConfigResolver::new(&fs, "/work");
        assert!(resolver.resolve(RawInput::named("../up")).is_err());
        assert!(resolver.resolve(RawInput::named("api").database("db2")).is_err());
    }
}
