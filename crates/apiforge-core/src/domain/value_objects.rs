//! Domain value objects: the database dialect.
//!
//! # Design
//!
//! `Database` is a pure value type: `Copy`, equality-by-value, no identity.
//! Every dialect-specific fact the template catalog needs (driver packages,
//! default port, default user, display name) is answered here so that the
//! catalog never matches on string literals.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Fill in `drivers`, `default_port`, `default_user`, `display_name`
//! 4. Add its markers in `validation.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Database ─────────────────────────────────────────────────────────────────

/// A supported relational database dialect.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    #[default]
    Postgres,
    Mysql,
    Sqlite,
}

/// A single npm dependency entry: package name and semver range.
pub type Dependency = (&'static str, &'static str);

impl Database {
    /// All dialects, in menu order.
    pub const ALL: [Database; 3] = [Self::Postgres, Self::Mysql, Self::Sqlite];

    /// Canonical lowercase identifier, also the Sequelize dialect string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Sqlite => "sqlite",
        }
    }

    /// Human-facing product name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Postgres => "PostgreSQL",
            Self::Mysql => "MySQL",
            Self::Sqlite => "SQLite",
        }
    }

    /// Driver packages Sequelize needs for this dialect.
    pub const fn drivers(&self) -> &'static [Dependency] {
        match self {
            Self::Postgres => &[("pg", "^8.11.3"), ("pg-hstore", "^2.3.4")],
            Self::Mysql => &[("mysql2", "^3.6.5")],
            Self::Sqlite => &[("sqlite3", "^5.1.6")],
        }
    }

    /// Default TCP port. `None` for file-backed dialects.
    pub const fn default_port(&self) -> Option<u16> {
        match self {
            Self::Postgres => Some(5432),
            Self::Mysql => Some(3306),
            Self::Sqlite => None,
        }
    }

    /// Default administrative user. `None` for file-backed dialects.
    pub const fn default_user(&self) -> Option<&'static str> {
        match self {
            Self::Postgres => Some("postgres"),
            Self::Mysql => Some("root"),
            Self::Sqlite => None,
        }
    }

    /// `true` if the dialect stores data in a local file instead of a server.
    pub const fn is_file_backed(&self) -> bool {
        self.default_port().is_none()
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            _ => Err(DomainError::UnsupportedDatabase { value: s.into() }),
        }
    }
}
