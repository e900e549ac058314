//! CLI errors: core failures plus the config-file and I/O problems only the
//! binary can hit.  Each error renders with its suggestions; see
//! [`CliError::format_plain`].

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use apiforge_core::application::ConfigError as CoreConfigError;
use apiforge_core::error::{ErrorCategory as CoreCategory, ForgeError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Exit code for every failure the CLI reports itself.  Usage errors exit
/// with 2 straight from clap.
pub const EXIT_FAILURE: u8 = 1;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `apiforge-core`.
    #[error(transparent)]
    Core(ForgeError),

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user aborted a prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<ForgeError> for CliError {
    fn from(err: ForgeError) -> Self {
        if err.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Core(err)
        }
    }
}

impl From<CoreConfigError> for CliError {
    fn from(err: CoreConfigError) -> Self {
        ForgeError::from(err).into()
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Hints printed under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Show the active file with 'apiforge config path'".into(),
                "Recreate it with 'apiforge init --force'".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],

            Self::Cancelled => vec!["No files were written".into()],
        }
    }

    /// Drives the log level.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Conflict => ErrorCategory::Conflict,
                CoreCategory::Filesystem => ErrorCategory::Filesystem,
                CoreCategory::Cancelled => ErrorCategory::Cancelled,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Filesystem,
            Self::Cancelled => ErrorCategory::Cancelled,
        }
    }

    /// Exit code to pass to the OS.  Every category maps to
    /// [`EXIT_FAILURE`]; the category only drives styling and log level.
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }

    /// Message, causes (when verbose) and suggestions, with ANSI styling.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, |part, text| match part {
            Part::Title => format!("{} {}", "\u{2717}".red().bold(), text.red().bold()),
            Part::Message => text.red().to_string(),
            Part::Cause => format!("{} {}", "\u{2192}".dimmed(), text.dimmed()),
            Part::Heading => text.yellow().bold().to_string(),
            Part::Hint => format!("{} {}", "\u{2139}".blue(), text.dimmed()),
        })
    }

    /// Same layout as [`Self::format_colored`] without escape codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, |part, text| match part {
            Part::Cause => format!("Caused by: {text}"),
            _ => text.to_owned(),
        })
    }

    fn render(&self, verbose: bool, paint: impl Fn(Part, &str) -> String) -> String {
        if matches!(self, Self::Cancelled) {
            return format!("{}\n", paint(Part::Title, &self.to_string()));
        }

        let mut lines = vec![
            String::new(),
            paint(Part::Title, "Error:"),
            format!("  {}", paint(Part::Message, &self.to_string())),
        ];

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(format!("  {}", paint(Part::Cause, &err.to_string())));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint(Part::Heading, "Suggestions:"));
            lines.extend(suggestions.iter().map(|s| format!("  {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint(Part::Hint, "Use -v / --verbose for more details."));
        }

        lines.join("\n") + "\n"
    }

    /// Emit one event at a severity matching the category.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::Cancelled => tracing::info!("cancelled by user"),
            ErrorCategory::UserError | ErrorCategory::Conflict => {
                tracing::warn!(?category, "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Filesystem | ErrorCategory::Internal => {
                tracing::error!(?category, "{self}")
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

/// Pieces of a rendered error report.
#[derive(Debug, Clone, Copy)]
enum Part {
    Title,
    Message,
    Cause,
    Heading,
    Hint,
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// The target directory is taken.
    Conflict,
    /// Reading or writing files failed.
    Filesystem,
    /// Configuration error.
    Configuration,
    /// The user aborted.
    Cancelled,
    /// Internal error (bug).
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert I/O failures into [`CliError`] at call-sites
/// with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
