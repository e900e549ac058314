//! Project Service - main application orchestrator.
//!
//! This service coordinates the entire creation workflow:
//! 1. Resolve raw input into a configuration
//! 2. Build the template set and check its consistency
//! 3. Materialize it under `base_dir/name` (all-or-nothing)
//! 4. Install dependencies (best effort)

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::{
        ports::Filesystem,
        services::{
            config_resolver::{ConfigResolver, RawInput},
            materializer::ProjectMaterializer,
            provisioner::{DependencyProvisioner, ProvisionOutcome},
        },
    },
    domain::{DomainValidator, ProjectConfig, TemplateSet, catalog},
    error::ForgeResult,
};

/// A successfully created project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProject {
    pub root: PathBuf,
    pub config: ProjectConfig,
    pub files_written: usize,
    pub provision: ProvisionOutcome,
}

/// Progress notifications for callers that render feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Writing { files: usize },
    Installing,
}

/// Main creation service.
pub struct ProjectService {
    filesystem: Box<dyn Filesystem>,
    provisioner: DependencyProvisioner,
    base_dir: PathBuf,
}

impl ProjectService {
    /// Create a new service writing projects beneath `base_dir`.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        provisioner: DependencyProvisioner,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            provisioner,
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn provisioner(&self) -> &DependencyProvisioner {
        &self.provisioner
    }

    /// Resolve, build and check a project without touching the disk.
    #[instrument(skip_all)]
    pub fn plan(&self, raw: RawInput) -> ForgeResult<(ProjectConfig, TemplateSet)> {
        let config = ConfigResolver::new(self.filesystem.as_ref(), &self.base_dir).resolve(raw)?;
        let set = catalog::build(&config);
        DomainValidator::validate_template_set(&set, &config)?;
        info!(files = set.file_count(), "template set built");
        Ok((config, set))
    }

    pub fn create_project(&self, raw: RawInput) -> ForgeResult<CreatedProject> {
        self.create_project_with(raw, |_| {})
    }

    /// Like [`create_project`](Self::create_project), reporting each
    /// effectful stage before it starts.
    #[instrument(skip_all, fields(name = raw.name.as_deref().unwrap_or("")))]
    pub fn create_project_with(
        &self,
        raw: RawInput,
        mut on_stage: impl FnMut(Stage),
    ) -> ForgeResult<CreatedProject> {
        let (config, set) = self.plan(raw)?;
        let root = self.base_dir.join(config.name());

        on_stage(Stage::Writing {
            files: set.file_count(),
        });
        let root = ProjectMaterializer::new(self.filesystem.as_ref()).materialize(&root, &set)?;

        let provision = if config.install_deps() {
            on_stage(Stage::Installing);
            self.provisioner.provision(&root)
        } else {
            info!("dependency installation skipped");
            ProvisionOutcome::Skipped
        };

        info!(root = %root.display(), "project created");
        Ok(CreatedProject {
            root,
            config,
            files_written: set.file_count(),
            provision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{
            error::{ConfigError, FsError, MaterializationError},
            ports::{CommandSpec, CommandStatus, MockCommandRunner, MockFilesystem},
        },
        domain::Database,
        error::ForgeError,
    };

    fn writable_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_remove_dir_all().never();
        fs
    }

    fn idle_runner() -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();
        runner
    }

    fn service(fs: MockFilesystem, runner: MockCommandRunner) -> ProjectService {
        ProjectService::new(
            Box::new(fs),
            DependencyProvisioner::new(Box::new(runner), CommandSpec::default()),
            "/work",
        )
    }

    #[test]
    fn mysql_without_auth_or_install_is_skipped() {
        let svc = service(writable_fs(), idle_runner());
        let created = svc
            .create_project(RawInput::named("api1").database("mysql").auth(false).install(false))
            .unwrap();

        assert_eq!(created.root, PathBuf::from("/work/api1"));
        assert_eq!(created.config.database(), Database::Mysql);
        assert_eq!(created.files_written, 18);
        assert_eq!(created.provision, ProvisionOutcome::Skipped);
    }

    #[test]
    fn install_runs_in_project_root() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, cwd| cwd == Path::new("/work/api2"))
            .times(1)
            .returning(|_, _| Ok(CommandStatus::success()));

        let mut stages = Vec::new();
        let created = service(writable_fs(), runner)
            .create_project_with(RawInput::named("api2"), |s| stages.push(s))
            .unwrap();

        assert_eq!(created.provision, ProvisionOutcome::Installed);
        assert_eq!(created.files_written, 21);
        assert_eq!(stages, [Stage::Writing { files: 21 }, Stage::Installing]);
    }

    #[test]
    fn failed_install_still_creates_project() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _| Ok(CommandStatus::exited(1)));

        let created = service(writable_fs(), runner)
            .create_project(RawInput::named("api"))
            .unwrap();
        assert!(created.provision.warning().is_some());
    }

    #[test]
    fn config_errors_stop_before_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir().never();

        let err = service(fs, idle_runner())
            .create_project(RawInput::named("api"))
            .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Config(ConfigError::TargetExists { .. })
        ));
    }

    #[test]
    fn materialization_failure_skips_install() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            Err(FsError::new(
                "write_file",
                p,
                std::io::ErrorKind::Other,
                "no space left on device",
            ))
        });
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));

        let err = service(fs, idle_runner())
            .create_project(RawInput::named("api"))
            .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Materialization(MaterializationError::FileWriteFailed { .. })
        ));
    }

    #[test]
    fn plan_does_not_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().never();
        fs.expect_write_file().never();

        let (config, set) = service(fs, idle_runner())
            .plan(RawInput::named("api").database("sqlite"))
            .unwrap();
        assert_eq!(config.database(), Database::Sqlite);
        assert!(set.contains("src/config/database.js"));
    }
}
