use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Invalid date '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Cannot sample {requested} slots from a universe of {available}")]
    InvalidSampleSize { requested: usize, available: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("File access error on {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SeedError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type SeedResult<T> = Result<T, SeedError>;
