//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand the invocation creates a project.  Subcommand names
/// take precedence over `NAME`, so a project cannot be called `init`,
/// `config` or `completions` from the command line.
#[derive(Debug, Parser)]
#[command(
    name    = "apiforge",
    bin_name = "apiforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Express + Sequelize API generator",
    long_about = "apiforge generates a ready-to-run Express REST API with a \
                  Sequelize data layer for PostgreSQL, MySQL or SQLite, \
                  optionally with JWT authentication.",
    after_help = "EXAMPLES:\n\
        \x20 apiforge                                  # interactive\n\
        \x20 apiforge my-api --database mysql --no-auth\n\
        \x20 apiforge shop-api -d sqlite --skip-install -y\n\
        \x20 apiforge completions bash > ~/.local/share/bash-completion/completions/apiforge",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project creation arguments (used when no subcommand is given).
    #[command(flatten)]
    pub create: CreateArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// Auxiliary subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 apiforge completions bash > ~/.local/share/bash-completion/completions/apiforge\n\
            \x20 apiforge completions zsh  > ~/.zfunc/_apiforge\n\
            \x20 apiforge completions fish > ~/.config/fish/completions/apiforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 apiforge init                     # default location\n\
            \x20 apiforge -c ./apiforge.toml init  # explicit file"
    )]
    Init(InitArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 apiforge config show\n\
            \x20 apiforge config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for project creation.
#[derive(Debug, Default, Args)]
pub struct CreateArgs {
    /// Project name; becomes the directory created under the current one.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Database dialect.  Kept as text so unknown values are reported with
    /// the list of supported ones.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DB",
        help = "Database: postgres, mysql or sqlite"
    )]
    pub database: Option<String>,

    /// Generate JWT authentication.
    #[arg(long = "auth", overrides_with = "no_auth", help = "Include JWT authentication")]
    pub auth: bool,

    /// Leave out JWT authentication.
    #[arg(long = "no-auth", overrides_with = "auth", help = "Leave out JWT authentication")]
    pub no_auth: bool,

    /// Do not run `npm install` after writing the project.
    #[arg(long = "skip-install", help = "Skip dependency installation")]
    pub skip_install: bool,

    /// Skip all prompts; unset values fall back to configured defaults.
    #[arg(short = 'y', long = "yes", help = "Accept defaults without prompting")]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

impl CreateArgs {
    /// Auth choice given on the command line, if any.
    pub fn auth_flag(&self) -> Option<bool> {
        match (self.auth, self.no_auth) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Install choice given on the command line, if any.
    pub fn install_flag(&self) -> Option<bool> {
        self.skip_install.then_some(false)
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `apiforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `apiforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `apiforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path of the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
