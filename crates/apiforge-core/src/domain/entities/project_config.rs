use std::fmt;

use crate::domain::{error::DomainError, value_objects::Database};

/// Fully resolved project configuration.
///
/// Immutable once built; every field is read through an accessor. The only
/// way to obtain one is [`ProjectConfig::builder`], which validates the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    database: Database,
    auth_enabled: bool,
    install_deps: bool,
}

impl ProjectConfig {
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn auth_enabled(&self) -> bool {
        self.auth_enabled
    }

    pub fn install_deps(&self) -> bool {
        self.install_deps
    }

    /// npm-compatible package name: lowercase, with runs of characters npm
    /// rejects collapsed into a single `-`.
    pub fn package_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                out.push(c);
            } else if !out.ends_with('-') {
                out.push('-');
            }
        }
        let trimmed = out.trim_matches(|c| c == '-' || c == '.' || c == '_');
        if trimmed.is_empty() {
            "api".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Validate a raw project name.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name != name.trim() {
            return Err(invalid("name cannot start or end with whitespace"));
        }
        if name == "." || name == ".." {
            return Err(invalid("name cannot be a relative path segment"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.chars().any(char::is_control) {
            return Err(invalid("name cannot contain control characters"));
        }
        Ok(())
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, auth: {}, install: {})",
            self.name,
            self.database,
            if self.auth_enabled { "yes" } else { "no" },
            if self.install_deps { "yes" } else { "no" },
        )
    }
}

/// Builder for [`ProjectConfig`].
///
/// `database` defaults to postgres; `auth_enabled` and `install_deps`
/// default to `true`.
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    name: Option<String>,
    database: Database,
    auth_enabled: bool,
    install_deps: bool,
}

impl Default for ProjectConfigBuilder {
    fn default() -> Self {
        Self {
            name: None,
            database: Database::default(),
            auth_enabled: true,
            install_deps: true,
        }
    }
}

impl ProjectConfigBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn auth(mut self, enabled: bool) -> Self {
        self.auth_enabled = enabled;
        self
    }

    pub fn install_deps(mut self, install: bool) -> Self {
        self.install_deps = install;
        self
    }

    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        ProjectConfig::validate_name(&name)?;

        Ok(ProjectConfig {
            name,
            database: self.database,
            auth_enabled: self.auth_enabled,
            install_deps: self.install_deps,
        })
    }
}
