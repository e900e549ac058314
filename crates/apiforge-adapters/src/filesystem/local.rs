//! Local filesystem adapter using std::fs.

use std::fs;
use std::path::Path;

use apiforge_core::application::{error::FsError, ports::Filesystem};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir(path).map_err(|e| FsError::from_io("create directory", path, &e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir_all(path).map_err(|e| FsError::from_io("create directory", path, &e))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        fs::write(path, content).map_err(|e| FsError::from_io("write file", path, &e))
    }

    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks count as taken.
        path.symlink_metadata().is_ok()
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), FsError> {
        fs::remove_dir_all(path).map_err(|e| FsError::from_io("remove directory", path, &e))
    }
}
