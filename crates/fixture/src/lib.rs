//! # Fixture files
//!
//! Line-oriented read/write access to SQL fixture files, plus the two
//! whole-file rewrites built on top of it: appending generated rows and
//! stripping comment lines.

pub mod appender;
pub mod file_set;
pub mod memory;
pub mod store;
pub mod stripper;

pub use appender::FixtureAppender;
pub use file_set::{ExplicitFileSet, FileSetProvider, GlobFileSet};
pub use memory::MemoryFixtureStore;
pub use store::{FixtureStore, FsFixtureStore};
pub use stripper::{CommentStripper, StripReport};
