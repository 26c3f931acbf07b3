//! Ways of deciding which fixture files a pass should touch.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use schedseed_core::errors::{SeedError, SeedResult};
use tracing::debug;

pub trait FileSetProvider {
    fn files(&self) -> SeedResult<Vec<PathBuf>>;
}

/// A fixed list of paths, returned as given.
#[derive(Debug, Clone, Default)]
pub struct ExplicitFileSet(pub Vec<PathBuf>);

impl FileSetProvider for ExplicitFileSet {
    fn files(&self) -> SeedResult<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}

/// Regular files directly inside `dir` whose names match a glob such as
/// `*.sql`. Hidden files are skipped. Results are sorted by path.
#[derive(Debug, Clone)]
pub struct GlobFileSet {
    dir: PathBuf,
    matcher: GlobMatcher,
}

impl GlobFileSet {
    pub fn new(dir: impl Into<PathBuf>, pattern: &str) -> SeedResult<Self> {
        let matcher = Glob::new(pattern)
            .map_err(|e| SeedError::InvalidConfig(format!("bad file pattern '{}': {}", pattern, e)))?
            .compile_matcher();

        Ok(Self {
            dir: dir.into(),
            matcher,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSetProvider for GlobFileSet {
    fn files(&self) -> SeedResult<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| SeedError::file_access(&self.dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SeedError::file_access(&self.dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| SeedError::file_access(entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }

            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with('.') || !self.matcher.is_match(name) {
                continue;
            }
            files.push(entry.path());
        }

        files.sort();
        debug!(dir = %self.dir.display(), count = files.len(), "Discovered fixture files");
        Ok(files)
    }
}
