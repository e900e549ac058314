//! Project creation, the default action.
//!
//! Responsibility: merge flags, prompt answers and configured defaults into a
//! `RawInput`, call the core `ProjectService`, and display results.  No
//! business logic lives here.

use tracing::{debug, instrument};

use apiforge_adapters::{LocalFilesystem, SystemCommandRunner};
use apiforge_core::prelude::*;

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::{AppConfig, Defaults},
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompt,
};

/// Execute project creation.
///
/// Dispatch sequence:
/// 1. Take values from flags
/// 2. Prompt for the rest when interactive
/// 3. Fill what is still unset from configuration
/// 4. Early-exit with a preview if `--dry-run`
/// 5. Create the project, with a spinner while dependencies install
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("")))]
pub fn execute(
    args: CreateArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut raw = RawInput {
        name: args.name.clone(),
        database: args.database.clone(),
        auth_enabled: args.auth_flag(),
        install_deps: args.install_flag(),
    };

    if prompt::should_prompt(&args, global) {
        prompt::complete(&mut raw, &config.defaults)?;
    }
    apply_defaults(&mut raw, &config.defaults);
    debug!(?raw, "input merged");

    let base_dir =
        std::env::current_dir().with_cli_context(|| "Failed to read the current directory")?;
    let provisioner = DependencyProvisioner::new(
        Box::new(SystemCommandRunner::new()),
        config.command_spec(),
    );
    let service = ProjectService::new(Box::new(LocalFilesystem::new()), provisioner, base_dir);

    if args.dry_run {
        return preview(&service, raw, &output);
    }

    let name = raw.name.as_deref().unwrap_or_default().trim().to_owned();
    let command = service.provisioner().command().to_string();
    let mut header = Ok(());
    let mut spinner = None;
    let result = service.create_project_with(raw, |stage| match stage {
        Stage::Writing { files } => {
            header = output.header(&format!("Creating {name} ({files} files)"));
        }
        Stage::Installing => {
            spinner = Some(output.spinner(format!("Running {command}...")));
        }
    });
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let created = result?;
    header?;

    report(&created, &command, &output)?;
    Ok(())
}

/// Lowest-precedence fill: anything neither a flag nor a prompt supplied.
fn apply_defaults(raw: &mut RawInput, defaults: &Defaults) {
    raw.database.get_or_insert_with(|| defaults.database.clone());
    raw.auth_enabled.get_or_insert(defaults.auth);
    raw.install_deps.get_or_insert(defaults.install);
}

fn preview(service: &ProjectService, raw: RawInput, output: &OutputManager) -> CliResult<()> {
    let (config, set) = service.plan(raw)?;
    let root = service.base_dir().join(config.name());

    output.header(&format!("Dry run: {config}"))?;
    output.print(&format!("  Location: {}", root.display()))?;
    output.print("")?;
    for dir in set.provisioning_plan().directories() {
        output.print(&format!("  {dir}/"))?;
    }
    for (path, content) in set.files() {
        output.print(&format!("  {path} ({} bytes)", content.len()))?;
    }
    output.print("")?;
    output.info(&format!("{} files, nothing written", set.file_count()))?;
    Ok(())
}

fn report(created: &CreatedProject, command: &str, output: &OutputManager) -> CliResult<()> {
    output.success(&format!(
        "Created {} ({} files) at {}",
        created.config,
        created.files_written,
        created.root.display()
    ))?;

    match &created.provision {
        ProvisionOutcome::Installed => output.success("Dependencies installed")?,
        ProvisionOutcome::Skipped => output.info("Dependency installation skipped")?,
        ProvisionOutcome::Warned(warning) => {
            output.warning(&warning.to_string())?;
            output.warning(&warning.suggestion())?;
        }
    }

    output.print("")?;
    output.print("Next steps:")?;
    for step in next_steps(created, command) {
        output.print(&format!("  {step}"))?;
    }
    Ok(())
}

fn next_steps(created: &CreatedProject, command: &str) -> Vec<String> {
    let mut steps = vec![format!("cd {}", shell_quote(created.config.name()))];
    if !created.provision.is_installed() {
        steps.push(command.to_owned());
    }
    steps.push("cp .env.example .env".into());
    steps.push("npm run dev".into());
    steps
}

/// Quote `word` for a POSIX shell unless it is made only of safe characters.
fn shell_quote(word: &str) -> String {
    let safe = word
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '+'));
    if safe {
        word.to_owned()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
