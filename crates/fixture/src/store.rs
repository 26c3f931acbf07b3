//! Whole-file, line-oriented access to fixture files.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use schedseed_core::errors::{SeedError, SeedResult};
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads and writes a fixture as a sequence of lines.
///
/// Lines keep their terminators, so writing back exactly what was read
/// reproduces the file byte for byte.
pub trait FixtureStore {
    fn read_lines(&self, path: &Path) -> SeedResult<Vec<String>>;

    fn write_lines(&self, path: &Path, lines: &[String]) -> SeedResult<()>;
}

impl<S: FixtureStore + ?Sized> FixtureStore for &S {
    fn read_lines(&self, path: &Path) -> SeedResult<Vec<String>> {
        (**self).read_lines(path)
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> SeedResult<()> {
        (**self).write_lines(path, lines)
    }
}

/// Splits text after every `\n`. The last line may lack a terminator.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Filesystem-backed store.
///
/// Writes go to a temporary file in the target's directory which is then
/// renamed over the target, so a failed write leaves the old content intact.
/// Read-only targets are refused, and an existing target's permissions are
/// carried over to the replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFixtureStore;

impl FixtureStore for FsFixtureStore {
    fn read_lines(&self, path: &Path) -> SeedResult<Vec<String>> {
        let content =
            fs::read_to_string(path).map_err(|e| SeedError::file_access(path, e))?;
        let lines = split_lines(&content);
        debug!(path = %path.display(), lines = lines.len(), "Read fixture");
        Ok(lines)
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> SeedResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let permissions = match fs::metadata(path) {
            Ok(metadata) => {
                if metadata.permissions().readonly() {
                    return Err(SeedError::file_access(
                        path,
                        io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only"),
                    ));
                }
                Some(metadata.permissions())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(SeedError::file_access(path, e)),
        };

        let mut temp_file =
            NamedTempFile::new_in(dir).map_err(|e| SeedError::file_access(path, e))?;
        for line in lines {
            temp_file
                .write_all(line.as_bytes())
                .map_err(|e| SeedError::file_access(path, e))?;
        }
        temp_file
            .flush()
            .map_err(|e| SeedError::file_access(path, e))?;

        if let Some(permissions) = permissions {
            temp_file
                .as_file()
                .set_permissions(permissions)
                .map_err(|e| SeedError::file_access(path, e))?;
        }

        // Atomically replace the target
        temp_file
            .persist(path)
            .map_err(|e| SeedError::file_access(path, e.error))?;

        debug!(path = %path.display(), lines = lines.len(), "Wrote fixture");
        Ok(())
    }
}
