//! In-memory filesystem adapter for testing.
//!
//! Supports fault injection so rollback paths can be exercised without
//! touching the disk.

use std::{
    collections::{BTreeMap, BTreeSet},
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use apiforge_core::application::{error::FsError, ports::Filesystem};
use tracing::debug;

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle for inspection while
/// the service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    writes: usize,
    faults: Faults,
}

#[derive(Debug, Default)]
struct Faults {
    write_number: Option<usize>,
    create_dir_path: Option<PathBuf>,
    remove: bool,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a directory (and its ancestors).
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        insert_ancestors(&mut self.lock().directories, path.as_ref());
        self
    }

    /// Pre-populate a file.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        {
            let mut inner = self.lock();
            if let Some(parent) = path.as_ref().parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.as_ref().to_path_buf(), content.into());
        }
        self
    }

    /// Make the `n`th `write_file` call (1-based) fail.
    pub fn fail_on_write(self, n: usize) -> Self {
        self.lock().faults.write_number = Some(n);
        self
    }

    /// Make `create_dir_all` fail for `path`.
    pub fn fail_creating(self, path: impl Into<PathBuf>) -> Self {
        self.lock().faults.create_dir_path = Some(path.into());
        self
    }

    /// Make `remove_dir_all` fail.
    pub fn fail_removing(self) -> Self {
        self.lock().faults.remove = true;
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    /// All files, sorted by path.
    pub fn files(&self) -> Vec<PathBuf> {
        self.lock().files.keys().cloned().collect()
    }

    /// All directories, sorted by path.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.lock().directories.iter().cloned().collect()
    }

    /// Number of `write_file` calls so far, including failed ones.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        directories.insert(ancestor.to_path_buf());
    }
}

fn injected(operation: &'static str, path: &Path) -> FsError {
    FsError::new(operation, path, ErrorKind::Other, "injected failure")
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.lock();
        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(FsError::new(
                "create directory",
                path,
                ErrorKind::AlreadyExists,
                "already exists",
            ));
        }
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.lock();
        if inner.faults.create_dir_path.as_deref() == Some(path) {
            return Err(injected("create directory", path));
        }
        if inner.files.contains_key(path) {
            return Err(FsError::new(
                "create directory",
                path,
                ErrorKind::AlreadyExists,
                "a file exists at this path",
            ));
        }
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        let mut inner = self.lock();
        inner.writes += 1;

        if inner.faults.write_number == Some(inner.writes) {
            debug!(path = %path.display(), "injecting write failure");
            return Err(injected("write file", path));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(FsError::new(
                    "write file",
                    path,
                    ErrorKind::NotFound,
                    "parent directory does not exist",
                ));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.lock();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.lock();
        if inner.faults.remove {
            return Err(injected("remove directory", path));
        }
        if !inner.directories.contains(path) {
            return Err(FsError::new(
                "remove directory",
                path,
                ErrorKind::NotFound,
                "no such directory",
            ));
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}
