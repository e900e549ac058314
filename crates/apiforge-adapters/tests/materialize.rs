//! End-to-end project creation against real and in-memory filesystems.

use std::collections::BTreeSet;
use std::io;
use std::path::Path;

use apiforge_adapters::{LocalFilesystem, MemoryFilesystem, ScriptedRunner};
use apiforge_core::prelude::*;
use walkdir::WalkDir;

fn service(fs: impl Filesystem + 'static, runner: ScriptedRunner, base: &Path) -> ProjectService {
    ProjectService::new(
        Box::new(fs),
        DependencyProvisioner::new(Box::new(runner), CommandSpec::default()),
        base,
    )
}

/// Relative paths of every file under `root`.
fn tree(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn mysql_project_without_auth_or_install() {
    let tmp = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new();
    let svc = service(LocalFilesystem::new(), runner.clone(), tmp.path());

    let created = svc
        .create_project(RawInput::named("api1").database("mysql").auth(false).install(false))
        .unwrap();

    assert_eq!(created.root, tmp.path().join("api1"));
    assert_eq!(created.provision, ProvisionOutcome::Skipped);
    assert!(runner.invocations().is_empty());

    let files = tree(&created.root);
    assert_eq!(files.len(), created.files_written);
    assert!(files.contains("src/models/User.js"));
    assert!(files.contains("src/migrations/.gitkeep"));
    assert!(!files.contains("src/routes/auth.js"));

    let pkg = std::fs::read_to_string(created.root.join("package.json")).unwrap();
    assert!(pkg.contains("\"mysql2\""));
    assert!(!pkg.contains("jsonwebtoken"));
}

#[test]
fn postgres_project_with_auth() {
    let tmp = tempfile::tempdir().unwrap();
    let svc = service(LocalFilesystem::new(), ScriptedRunner::new(), tmp.path());

    let created = svc
        .create_project(RawInput::named("api2").database("postgres").install(false))
        .unwrap();

    let files = tree(&created.root);
    for file in [
        "src/controllers/AuthController.js",
        "src/middlewares/auth.js",
        "src/routes/auth.js",
    ] {
        assert!(files.contains(file), "{file}");
    }

    let env = std::fs::read_to_string(created.root.join(".env.example")).unwrap();
    assert!(env.contains("DB_PORT=5432"));
    assert!(env.contains("JWT_SECRET="));
}

#[test]
fn written_tree_matches_template_set() {
    let tmp = tempfile::tempdir().unwrap();
    let svc = service(LocalFilesystem::new(), ScriptedRunner::new(), tmp.path());
    let raw = RawInput::named("shop").database("sqlite").install(false);

    let (_, set) = svc.plan(raw.clone()).unwrap();
    let created = svc.create_project(raw).unwrap();

    let expected: BTreeSet<String> = set.paths().map(|p| p.to_string()).collect();
    assert_eq!(tree(&created.root), expected);
    for (path, content) in set.files() {
        let on_disk = std::fs::read_to_string(path.to_path(&created.root)).unwrap();
        assert_eq!(on_disk, content, "{path}");
    }
}

#[test]
fn failing_any_write_leaves_no_root() {
    let total = {
        let fs = MemoryFilesystem::new().with_directory("/work");
        let created = service(fs, ScriptedRunner::new(), Path::new("/work"))
            .create_project(RawInput::named("api").install(false))
            .unwrap();
        created.files_written
    };

    for n in 1..=total {
        let fs = MemoryFilesystem::new().with_directory("/work").fail_on_write(n);
        let err = service(fs.clone(), ScriptedRunner::new(), Path::new("/work"))
            .create_project(RawInput::named("api").install(false))
            .unwrap_err();

        assert!(
            matches!(
                err,
                ForgeError::Materialization(MaterializationError::FileWriteFailed { .. })
            ),
            "write {n}: {err}"
        );
        assert!(!fs.exists(Path::new("/work/api")), "write {n} left a root");
        assert_eq!(fs.directories(), [Path::new("/"), Path::new("/work")], "write {n}");
    }
}

#[test]
fn directory_failure_leaves_no_root() {
    let fs = MemoryFilesystem::new()
        .with_directory("/work")
        .fail_creating("/work/api/src/routes");

    let err = service(fs.clone(), ScriptedRunner::new(), Path::new("/work"))
        .create_project(RawInput::named("api"))
        .unwrap_err();

    assert!(matches!(
        err,
        ForgeError::Materialization(MaterializationError::DirectoryCreateFailed { ref path, .. })
            if path == "src/routes"
    ));
    assert!(!fs.exists(Path::new("/work/api")));
    assert_eq!(fs.write_count(), 0);
}

#[test]
fn failed_rollback_reports_original_error() {
    let fs = MemoryFilesystem::new()
        .with_directory("/work")
        .fail_on_write(3)
        .fail_removing();

    let err = service(fs, ScriptedRunner::new(), Path::new("/work"))
        .create_project(RawInput::named("api").install(false))
        .unwrap_err();
    assert!(matches!(
        err,
        ForgeError::Materialization(MaterializationError::FileWriteFailed { .. })
    ));
}

#[test]
fn existing_directory_is_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("api");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(root.join("keep.txt"), "mine").unwrap();

    let err = service(LocalFilesystem::new(), ScriptedRunner::new(), tmp.path())
        .create_project(RawInput::named("api"))
        .unwrap_err();

    assert!(matches!(err, ForgeError::Config(ConfigError::TargetExists { .. })));
    assert_eq!(tree(&root), BTreeSet::from(["keep.txt".to_string()]));
}

#[test]
fn existing_file_blocks_creation() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("api"), "not a dir").unwrap();

    let err = service(LocalFilesystem::new(), ScriptedRunner::new(), tmp.path())
        .create_project(RawInput::named("api"))
        .unwrap_err();
    assert!(matches!(err, ForgeError::Config(ConfigError::TargetExists { .. })));
    assert_eq!(std::fs::read_to_string(tmp.path().join("api")).unwrap(), "not a dir");
}

#[test]
fn install_failure_keeps_project() {
    let tmp = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new().then_fail_to_spawn(io::ErrorKind::NotFound);
    let svc = service(LocalFilesystem::new(), runner.clone(), tmp.path());

    let created = svc.create_project(RawInput::named("api")).unwrap();

    let warning = created.provision.warning().unwrap();
    assert_eq!(warning.command, "npm install");
    assert!(created.root.join("package.json").exists());
    assert_eq!(runner.invocations()[0].cwd, created.root);
}

#[test]
fn install_runs_once_in_root() {
    let tmp = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new();
    let svc = service(LocalFilesystem::new(), runner.clone(), tmp.path());

    let created = svc.create_project(RawInput::named("api")).unwrap();
    assert_eq!(created.provision, ProvisionOutcome::Installed);
    assert_eq!(runner.invocations().len(), 1);
}
