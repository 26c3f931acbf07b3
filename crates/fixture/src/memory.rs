//! In-memory stand-in for the filesystem, used by tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use schedseed_core::errors::{SeedError, SeedResult};

use crate::store::{FixtureStore, split_lines};

#[derive(Debug, Default)]
pub struct MemoryFixtureStore {
    files: RefCell<HashMap<PathBuf, Vec<String>>>,
    denied: RefCell<HashSet<PathBuf>>,
}

impl MemoryFixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .borrow_mut()
            .insert(path.into(), split_lines(content));
    }

    /// Makes every later read or write of `path` fail with permission denied.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.denied.borrow_mut().insert(path.into());
    }

    pub fn lines(&self, path: impl AsRef<Path>) -> Option<Vec<String>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lines(path).map(|lines| lines.concat())
    }

    fn check_access(&self, path: &Path) -> SeedResult<()> {
        if self.denied.borrow().contains(path) {
            return Err(SeedError::file_access(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
            ));
        }
        Ok(())
    }
}

impl FixtureStore for MemoryFixtureStore {
    fn read_lines(&self, path: &Path) -> SeedResult<Vec<String>> {
        self.check_access(path)?;
        self.lines(path).ok_or_else(|| {
            SeedError::file_access(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            )
        })
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> SeedResult<()> {
        self.check_access(path)?;
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }
}
