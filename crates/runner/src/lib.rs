//! # Schedule seeder
//!
//! Wires configuration, the generation core and the fixture files together.
//! The binaries call [`generate_schedule`] and [`remove_comments`]; the
//! `_with` variants take their collaborators explicitly.

pub mod config;

use eyre::{Result, WrapErr, eyre};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schedseed_core::dates::DateRange;
use schedseed_core::emitter::ScheduleInsertEmitter;
use schedseed_core::sampler::SlotSampler;
use schedseed_fixture::{
    CommentStripper, FileSetProvider, FixtureAppender, FixtureStore, FsFixtureStore,
    GlobFileSet, StripReport,
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::config::SeedConfig;

/// Installs a global `fmt` subscriber at the given level.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Seeded when a seed is given, otherwise from OS entropy.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generates schedule rows for the configured range and appends them to the
/// configured fixture file. Returns the number of rows appended.
pub fn generate_schedule(config: &SeedConfig) -> Result<usize> {
    let mut rng = build_rng(config.rng_seed);
    generate_schedule_with(config, FsFixtureStore, &mut rng)
}

pub fn generate_schedule_with<S, R>(config: &SeedConfig, store: S, rng: &mut R) -> Result<usize>
where
    S: FixtureStore,
    R: Rng + ?Sized,
{
    let range = DateRange::parse(&config.start_date, &config.end_date)?;
    info!(
        start = %config.start_date,
        end = %config.end_date,
        days = range.len(),
        doctors = config.doctor_ids.len(),
        "Generating schedules"
    );

    let emitter = ScheduleInsertEmitter::new(SlotSampler::new(config.bounds));
    let universe = config.slot_universe();
    let statements = emitter.emit(range.days(), &config.doctor_ids, &universe, rng)?;

    let appended = FixtureAppender::new(store)
        .append(&config.fixture_file, &statements)
        .wrap_err_with(|| format!("Failed to append to {}", config.fixture_file.display()))?;

    Ok(appended)
}

/// Strips comment lines from every fixture matching the configured pattern.
pub fn remove_comments(config: &SeedConfig) -> Result<StripReport> {
    let files = GlobFileSet::new(&config.sql_dir, &config.sql_pattern)?;
    remove_comments_with(&files, FsFixtureStore)
}

/// Attempts every file before failing; the error names each file that could
/// not be rewritten.
pub fn remove_comments_with<P, S>(files: &P, store: S) -> Result<StripReport>
where
    P: FileSetProvider + ?Sized,
    S: FixtureStore,
{
    let paths = files.files()?;
    info!(files = paths.len(), "Removing comments");

    let report = CommentStripper::new(store).strip(&paths);
    info!(
        processed = report.processed.len(),
        removed = report.removed_lines,
        failed = report.failures.len(),
        "Comment removal finished"
    );

    if !report.is_success() {
        let details = report
            .failures
            .iter()
            .map(|(path, err)| format!("{}: {}", path.display(), err))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(eyre!(
            "Failed to strip comments from {} file(s): {}",
            report.failures.len(),
            details
        ));
    }

    Ok(report)
}
