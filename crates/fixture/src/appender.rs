use std::path::Path;

use schedseed_core::errors::SeedResult;
use tracing::info;

use crate::store::FixtureStore;

/// Adds generated statements to the end of an existing fixture.
#[derive(Debug, Clone)]
pub struct FixtureAppender<S> {
    store: S,
}

impl<S: FixtureStore> FixtureAppender<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the whole file, appends `new_lines` verbatim and writes the
    /// result back. The file must already exist.
    ///
    /// Returns the number of lines appended.
    pub fn append(&self, path: &Path, new_lines: &[String]) -> SeedResult<usize> {
        let mut lines = self.store.read_lines(path)?;
        let existing = lines.len();
        lines.extend_from_slice(new_lines);
        self.store.write_lines(path, &lines)?;

        info!(
            path = %path.display(),
            existing,
            appended = new_lines.len(),
            "Appended to fixture"
        );
        Ok(new_lines.len())
    }
}
