use crate::domain::{
    catalog::{AUTH_FILES, environment::database_name},
    entities::{ProjectConfig, TemplateSet},
    error::DomainError,
    value_objects::Database,
};

/// Identifiers that only appear in generated code when auth is enabled.
/// Matched case-sensitively.
const AUTH_MARKERS: [&str; 8] = [
    "middlewares/auth",
    "jsonwebtoken",
    "bcryptjs",
    "JWT_SECRET",
    "JWT_EXPIRES_IN",
    "AuthController",
    "authValidator",
    "authRouter",
];

/// Tokens identifying a dialect. Matched case-insensitively.
fn dialect_markers(database: Database) -> &'static [&'static str] {
    match database {
        Database::Postgres => &["postgres", "pg-hstore", "5432"],
        Database::Mysql => &["mysql", "3306"],
        Database::Sqlite => &["sqlite", "db_storage"],
    }
}

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        ProjectConfig::validate_name(name)
    }

    /// Check that a generated set agrees with the configuration it was
    /// built from.
    ///
    /// Text derived from the project name is ignored when scanning, so a
    /// project called `mysql-gateway` on postgres is not a violation.
    pub fn validate_template_set(
        set: &TemplateSet,
        config: &ProjectConfig,
    ) -> Result<(), DomainError> {
        set.validate()?;

        let auth = config.auth_enabled();
        for file in AUTH_FILES {
            if set.contains(file) != auth {
                return Err(DomainError::InconsistentTemplate {
                    path: file.to_string(),
                    reason: if auth {
                        "auth is enabled but the file is missing".into()
                    } else {
                        "auth is disabled but the file is present".into()
                    },
                });
            }
        }

        let derived = [
            config.name().to_string(),
            config.package_name(),
            database_name(config),
        ];
        let foreign: Vec<&str> = Database::ALL
            .into_iter()
            .filter(|db| *db != config.database())
            .flat_map(dialect_markers)
            .copied()
            .collect();

        for (path, content) in set.files() {
            let scrubbed = derived
                .iter()
                .filter(|d| !d.is_empty())
                .fold(content.to_string(), |text, d| text.replace(d.as_str(), ""));

            if !auth {
                if let Some(marker) = AUTH_MARKERS.iter().find(|m| scrubbed.contains(**m)) {
                    return Err(DomainError::InconsistentTemplate {
                        path: path.to_string(),
                        reason: format!("auth is disabled but found '{marker}'"),
                    });
                }
            }

            let lowered = scrubbed.to_lowercase();
            if let Some(marker) = foreign.iter().find(|m| lowered.contains(**m)) {
                return Err(DomainError::InconsistentTemplate {
                    path: path.to_string(),
                    reason: format!(
                        "references '{marker}' but the database is {}",
                        config.database()
                    ),
                });
            }
        }

        Ok(())
    }
}
