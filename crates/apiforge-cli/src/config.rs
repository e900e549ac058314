//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the values taken from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags and prompt answers (handled at the call-site, not here)
//! 2. Environment variables: `APIFORGE_<SECTION>__<KEY>`
//! 3. Config file (TOML, `--config` or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use apiforge_core::application::CommandSpec;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "APIFORGE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Values used when neither a flag nor a prompt supplies one.
    pub defaults: Defaults,
    /// Dependency installation command.
    pub install: InstallConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub database: String,
    pub auth: bool,
    pub install: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallConfig {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let install = CommandSpec::default();
        Self {
            defaults: Defaults {
                database: "postgres".into(),
                auth: true,
                install: true,
            },
            install: InstallConfig {
                program: install.program,
                args: install.args,
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `required` makes a missing file an error; it is set when the user
    /// named the file explicitly.
    pub fn load(file: &Path, required: bool) -> anyhow::Result<Self> {
        Self::load_with(file, required, environment())
    }

    fn load_with(file: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(file.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read configuration from {}", file.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The file to read: the explicit one, or [`Self::config_path`].
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(Self::config_path, Path::to_path_buf)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.apiforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "apiforge", "apiforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".apiforge.toml"))
    }

    /// The dependency installation command.
    pub fn command_spec(&self) -> CommandSpec {
        CommandSpec::new(&self.install.program, &self.install.args)
    }
}

/// `APIFORGE_DEFAULTS__DATABASE=mysql` sets `defaults.database`.
/// `install.args` is split on spaces.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(" ")
        .with_list_parse_key("install.args")
}
