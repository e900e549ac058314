// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside application errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unsupported database '{value}'")]
    UnsupportedDatabase { value: String },

    #[error("Invalid template path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Duplicate path in template set: {path}")]
    DuplicatePath { path: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Consistency Violations (generated output disagrees with its config)
    // ========================================================================
    #[error("Generated file '{path}' is inconsistent with the configuration: {reason}")]
    InconsistentTemplate { path: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use letters, numbers, hyphens, and underscores".into(),
                "Examples: my-api, orders_service, api2".into(),
            ],
            Self::UnsupportedDatabase { value } => vec![
                format!("'{}' is not a supported database", value),
                "Supported databases:".into(),
                "  • postgres (aliases: postgresql, pg)".into(),
                "  • mysql    (alias: mariadb)".into(),
                "  • sqlite   (alias: sqlite3)".into(),
            ],
            Self::InconsistentTemplate { .. } => vec![
                "The generated project failed its consistency check".into(),
                "This is a bug in apiforge, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::UnsupportedDatabase { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::InvalidPath { .. }
            | Self::DuplicatePath { .. }
            | Self::InconsistentTemplate { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
