//! Interactive prompts for values the command line left open.
//!
//! A flag always wins: only `None` fields of [`RawInput`] are asked for.
//! Escape or Ctrl-C on any prompt yields [`ConfigError::Cancelled`].

use std::io::IsTerminal;

use apiforge_core::application::{ConfigError, RawInput};

use crate::cli::{CreateArgs, GlobalArgs};
use crate::config::Defaults;

/// Prompts run only with a human on both ends and nobody opting out.
pub fn should_prompt(args: &CreateArgs, global: &GlobalArgs) -> bool {
    cfg!(feature = "interactive")
        && !args.yes
        && !global.quiet
        && std::io::stdin().is_terminal()
        && std::io::stderr().is_terminal()
}

/// Ask for every unset value, pre-selecting the configured default.
#[cfg(feature = "interactive")]
pub fn complete(raw: &mut RawInput, defaults: &Defaults) -> Result<(), ConfigError> {
    use apiforge_core::domain::{Database, DomainValidator};
    use dialoguer::{Input, Select, theme::ColorfulTheme};
    use tracing::debug;

    let theme = ColorfulTheme::default();

    if raw.name.is_none() {
        let name: String = Input::with_theme(&theme)
            .with_prompt("Project name")
            .validate_with(|input: &String| DomainValidator::validate_project_name(input.trim()))
            .interact_text()
            .map_err(|_| ConfigError::Cancelled)?;
        raw.name = Some(name);
    }

    if raw.database.is_none() {
        let items: Vec<&str> = Database::ALL.iter().map(Database::display_name).collect();
        let default = defaults
            .database
            .parse::<Database>()
            .ok()
            .and_then(|db| Database::ALL.iter().position(|d| *d == db))
            .unwrap_or(0);
        let index = Select::with_theme(&theme)
            .with_prompt("Database")
            .items(&items)
            .default(default)
            .interact_opt()
            .map_err(|_| ConfigError::Cancelled)?
            .ok_or(ConfigError::Cancelled)?;
        raw.database = Some(Database::ALL[index].as_str().to_owned());
    }

    if raw.auth_enabled.is_none() {
        raw.auth_enabled = Some(confirm(&theme, "Add JWT authentication?", defaults.auth)?);
    }

    if raw.install_deps.is_none() {
        raw.install_deps = Some(confirm(&theme, "Install dependencies now?", defaults.install)?);
    }

    debug!(?raw, "prompts answered");
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm(
    theme: &dialoguer::theme::ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    dialoguer::Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact_opt()
        .map_err(|_| ConfigError::Cancelled)?
        .ok_or(ConfigError::Cancelled)
}

/// Without the `interactive` feature nothing is asked.
#[cfg(not(feature = "interactive"))]
pub fn complete(_raw: &mut RawInput, _defaults: &Defaults) -> Result<(), ConfigError> {
    Ok(())
}
