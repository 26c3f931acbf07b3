//! Removes comment-only lines from SQL fixtures.

use std::path::{Path, PathBuf};

use schedseed_core::errors::{SeedError, SeedResult};
use tracing::{info, warn};

use crate::store::FixtureStore;

const COMMENT_MARKER: &str = "--";

/// True when the line, ignoring surrounding whitespace, starts with `--`.
pub fn is_comment_line(line: &str) -> bool {
    line.trim().starts_with(COMMENT_MARKER)
}

/// Keeps every non-comment line untouched and in order.
pub fn strip_comment_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !is_comment_line(line))
        .collect()
}

/// Outcome of stripping a set of files.
///
/// Files are independent, so one failure does not stop the rest.
#[derive(Debug, Default)]
pub struct StripReport {
    pub processed: Vec<PathBuf>,
    pub removed_lines: usize,
    pub failures: Vec<(PathBuf, SeedError)>,
}

impl StripReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CommentStripper<S> {
    store: S,
}

impl<S: FixtureStore> CommentStripper<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Rewrites one file without its comment lines, returning how many were
    /// dropped. The file is rewritten even when nothing was removed.
    pub fn strip_file(&self, path: &Path) -> SeedResult<usize> {
        let lines = self.store.read_lines(path)?;
        let before = lines.len();
        let kept = strip_comment_lines(lines);
        self.store.write_lines(path, &kept)?;
        Ok(before - kept.len())
    }

    pub fn strip<P: AsRef<Path>>(&self, paths: &[P]) -> StripReport {
        let mut report = StripReport::default();

        for path in paths {
            let path = path.as_ref();
            match self.strip_file(path) {
                Ok(removed) => {
                    info!(path = %path.display(), removed, "Stripped comments");
                    report.removed_lines += removed;
                    report.processed.push(path.to_path_buf());
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Failed to strip comments");
                    report.failures.push((path.to_path_buf(), err));
                }
            }
        }

        report
    }
}
