//! Unified error handling for apiforge core.
//!
//! [`ForgeError`] is what every public operation returns.  It wraps the
//! layer-specific errors and forwards their suggestions.

use thiserror::Error;

use crate::application::{ConfigError, MaterializationError};
use crate::domain::DomainError;

/// Root error type for apiforge core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForgeError {
    /// Business rule violations.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Input rejected before anything was written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the project failed; the partial tree was rolled back.
    #[error(transparent)]
    Materialization(#[from] MaterializationError),
}

impl ForgeError {
    /// Hints for the user, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Config(e) => e.suggestions(),
            Self::Materialization(e) => e.suggestions(),
        }
    }

    /// Coarse classification used by the CLI for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Config(e) => e.category(),
            Self::Materialization(e) => e.category(),
        }
    }

    /// True when the user aborted an interactive prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Config(ConfigError::Cancelled))
    }
}

/// Coarse error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Filesystem,
    Cancelled,
    Internal,
}

/// Result alias for core operations.
pub type ForgeResult<T> = Result<T, ForgeError>;
