//! Project materializer: writes a [`TemplateSet`] under a fresh root.
//!
//! The operation is all-or-nothing. The root is created first and owned by
//! a [`RootGuard`]; every failure after that point drops the guard, which
//! removes the partially written tree.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{error::MaterializationError, ports::Filesystem},
    domain::TemplateSet,
};

/// Writes template sets through the [`Filesystem`] port.
pub struct ProjectMaterializer<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> ProjectMaterializer<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Create `root` and write every file of `set` beneath it.
    ///
    /// `root` must not exist. On success the tree contains exactly the
    /// set's files and their parent directories.
    #[instrument(skip_all, fields(root = %root.display(), files = set.file_count()))]
    pub fn materialize(
        &self,
        root: &Path,
        set: &TemplateSet,
    ) -> Result<PathBuf, MaterializationError> {
        if self.fs.exists(root) {
            return Err(MaterializationError::TargetExists {
                root: root.to_path_buf(),
            });
        }

        self.fs.create_dir(root).map_err(|e| {
            if e.is_already_exists() {
                MaterializationError::TargetExists {
                    root: root.to_path_buf(),
                }
            } else {
                MaterializationError::DirectoryCreateFailed {
                    root: root.to_path_buf(),
                    path: ".".into(),
                    reason: e.reason,
                }
            }
        })?;

        let guard = RootGuard::new(self.fs, root);

        let plan = set.provisioning_plan();
        for dir in plan.directories() {
            debug!(path = %dir, "creating directory");
            self.fs
                .create_dir_all(&dir.to_path(root))
                .map_err(|e| MaterializationError::DirectoryCreateFailed {
                    root: root.to_path_buf(),
                    path: dir.to_string(),
                    reason: e.reason,
                })?;
        }

        for (path, content) in set.files() {
            debug!(path = %path, bytes = content.len(), "writing file");
            self.fs
                .write_file(&path.to_path(root), content)
                .map_err(|e| MaterializationError::FileWriteFailed {
                    root: root.to_path_buf(),
                    path: path.to_string(),
                    reason: e.reason,
                })?;
        }

        guard.commit();
        info!(
            directories = plan.directory_count(),
            files = set.file_count(),
            "project written"
        );
        Ok(root.to_path_buf())
    }
}

/// Scope guard owning a freshly created project root.
///
/// Dropping the guard without calling [`commit`](Self::commit) removes the
/// root recursively.
#[must_use = "dropping the guard immediately removes the root"]
pub struct RootGuard<'a> {
    fs: &'a dyn Filesystem,
    root: PathBuf,
    committed: bool,
}

impl<'a> RootGuard<'a> {
    pub fn new(fs: &'a dyn Filesystem, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            committed: false,
        }
    }

    /// Keep the root.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for RootGuard<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        warn!(root = %self.root.display(), "rolling back partially written project");
        match self.fs.remove_dir_all(&self.root) {
            Ok(()) => info!("rollback successful"),
            Err(e) => warn!(error = %e, "rollback failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use mockall::Sequence;

    use super::*;
    use crate::application::{error::FsError, ports::MockFilesystem};

    fn sample_set() -> TemplateSet {
        TemplateSet::new()
            .with_file("package.json", "{}\n")
            .and_then(|s| s.with_file("src/app.js", "app\n"))
            .and_then(|s| s.with_file("src/routes/index.js", "routes\n"))
            .unwrap()
    }

    fn denied(op: &'static str, path: &Path) -> FsError {
        FsError::new(op, path, io::ErrorKind::PermissionDenied, "permission denied")
    }

    #[test]
    fn writes_directories_before_files() {
        let mut fs = MockFilesystem::new();
        let mut seq = Sequence::new();
        let root = Path::new("/work/api");

        fs.expect_exists().return_const(false);
        fs.expect_create_dir()
            .withf(|p| p == Path::new("/work/api"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/work/api/src"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/work/api/src/routes"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file().times(3).returning(|_, _| Ok(()));
        fs.expect_remove_dir_all().never();

        let written = ProjectMaterializer::new(&fs).materialize(root, &sample_set());
        assert_eq!(written.unwrap(), root);
    }

    #[test]
    fn existing_root_is_left_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir().never();
        fs.expect_remove_dir_all().never();

        let err = ProjectMaterializer::new(&fs)
            .materialize(Path::new("/work/api"), &sample_set())
            .unwrap_err();
        assert!(matches!(err, MaterializationError::TargetExists { .. }));
    }

    #[test]
    fn lost_race_on_root_creation_is_not_rolled_back() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|p| {
            Err(FsError::new(
                "create_dir",
                p,
                io::ErrorKind::AlreadyExists,
                "exists",
            ))
        });
        fs.expect_remove_dir_all().never();

        let err = ProjectMaterializer::new(&fs)
            .materialize(Path::new("/work/api"), &sample_set())
            .unwrap_err();
        assert!(matches!(err, MaterializationError::TargetExists { .. }));
    }

    #[test]
    fn write_failure_rolls_back_root() {
        let mut fs = MockFilesystem::new();
        let root = Path::new("/work/api");

        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            if p.ends_with("src/app.js") {
                Err(denied("write_file", p))
            } else {
                Ok(())
            }
        });
        fs.expect_remove_dir_all()
            .withf(|p| p == Path::new("/work/api"))
            .times(1)
            .returning(|_| Ok(()));

        let err = ProjectMaterializer::new(&fs)
            .materialize(root, &sample_set())
            .unwrap_err();
        assert_eq!(
            err,
            MaterializationError::FileWriteFailed {
                root: root.to_path_buf(),
                path: "src/app.js".into(),
                reason: "permission denied".into(),
            }
        );
    }

    #[test]
    fn directory_failure_rolls_back_and_keeps_original_error() {
        let mut fs = MockFilesystem::new();

        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .returning(|p| Err(denied("create_dir_all", p)));
        fs.expect_write_file().never();
        fs.expect_remove_dir_all()
            .times(1)
            .returning(|p| Err(denied("remove_dir_all", p)));

        let err = ProjectMaterializer::new(&fs)
            .materialize(Path::new("/work/api"), &sample_set())
            .unwrap_err();
        assert!(
            matches!(err, MaterializationError::DirectoryCreateFailed { ref path, .. } if path == "src")
        );
    }

    #[test]
    fn uncommitted_guard_removes_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));
        drop(RootGuard::new(&fs, "/work/api"));
    }

    #[test]
    fn committed_guard_keeps_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_remove_dir_all().never();
        RootGuard::new(&fs, "/work/api").commit();
    }
}
