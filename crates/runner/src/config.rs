//! # Seeder Configuration
//!
//! Every setting has a built-in default matching the stock fixture layout,
//! and each can be overridden from the environment (a `.env` file is loaded
//! by the binaries first).
//!
//! ## Environment Variables
//!
//! - `SEED_FIXTURE_FILE`: fixture to append schedule rows to (default: "02_schedules.sql")
//! - `SEED_DOCTOR_IDS`: comma-separated doctor ids (default: "1,6,7,8,9,10")
//! - `SEED_SLOT_COUNT`: size of the slot universe `1..=N` (default: 8)
//! - `SEED_START_DATE` / `SEED_END_DATE`: inclusive range, `YYYY-MM-DD`
//!   (default: "2025-05-01" / "2025-08-31")
//! - `SEED_MIN_SLOTS` / `SEED_MAX_SLOTS`: slots per doctor per day (default: 4 / 8)
//! - `SEED_SQL_DIR`: directory scanned for comment stripping (default: ".")
//! - `SEED_SQL_PATTERN`: file name pattern for comment stripping (default: "*.sql")
//! - `SEED_RNG_SEED`: fixed seed for reproducible output (default: unset)
//! - `SEED_STRIP_COMMENTS`: also strip comments after seeding (default: false)
//! - `LOG_LEVEL`: logging level (default: "info")

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use eyre::{Report, Result, WrapErr, eyre};
use schedseed_core::errors::SeedError;
use schedseed_core::models::{DoctorId, SlotUniverse};
use schedseed_core::sampler::{DEFAULT_MAX_SLOTS, DEFAULT_MIN_SLOTS, SampleBounds};
use tracing::Level;

pub const DEFAULT_FIXTURE_FILE: &str = "02_schedules.sql";
pub const DEFAULT_DOCTOR_IDS: [i64; 6] = [1, 6, 7, 8, 9, 10];
pub const DEFAULT_SLOT_COUNT: u32 = 8;
pub const DEFAULT_START_DATE: &str = "2025-05-01";
pub const DEFAULT_END_DATE: &str = "2025-08-31";

/// Settings for one seeding run
///
/// Covers the generated schedule (fixture, doctors, slots, dates, sample
/// bounds), the comment-stripping pass and logging.
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use schedseed_runner::config::SeedConfig;
///
/// fn example() -> Result<()> {
///     let config = SeedConfig::from_env()?;
///     println!(
///         "Seeding {} from {} to {}",
///         config.fixture_file.display(),
///         config.start_date,
///         config.end_date
///     );
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Fixture the generated rows are appended to
    pub fixture_file: PathBuf,

    /// Doctors, in the order rows are generated for them
    pub doctor_ids: Vec<DoctorId>,

    /// Number of slots in a day
    pub slot_count: u32,

    /// First day to generate, `YYYY-MM-DD`
    pub start_date: String,

    /// Last day to generate, inclusive
    pub end_date: String,

    /// Inclusive range for how many slots each doctor gets per day
    pub bounds: SampleBounds,

    /// Directory scanned by the comment stripper
    pub sql_dir: PathBuf,

    /// File name glob selecting fixtures to strip (e.g., "*.sql")
    pub sql_pattern: String,

    /// Fixed seed for reproducible output; entropy is used when unset
    pub rng_seed: Option<u64>,

    /// Run the comment stripper after seeding
    pub strip_comments: bool,

    /// Log level for the application
    pub log_level: Level,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            fixture_file: PathBuf::from(DEFAULT_FIXTURE_FILE),
            doctor_ids: DEFAULT_DOCTOR_IDS.into_iter().map(DoctorId).collect(),
            slot_count: DEFAULT_SLOT_COUNT,
            start_date: DEFAULT_START_DATE.to_string(),
            end_date: DEFAULT_END_DATE.to_string(),
            bounds: SampleBounds::default(),
            sql_dir: PathBuf::from("."),
            sql_pattern: "*.sql".to_string(),
            rng_seed: None,
            strip_comments: false,
            log_level: Level::INFO,
        }
    }
}

impl SeedConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable that is set cannot be parsed, or if
    /// the minimum slot count exceeds the maximum.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let fixture_file = lookup("SEED_FIXTURE_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.fixture_file);

        let doctor_ids = match lookup("SEED_DOCTOR_IDS") {
            Some(raw) => parse_doctor_ids(&raw)?,
            None => defaults.doctor_ids,
        };

        let slot_count = parse_or(&lookup, "SEED_SLOT_COUNT", defaults.slot_count)?;
        if slot_count == 0 {
            let err = SeedError::InvalidConfig("slot universe is empty".to_string());
            return Err(Report::new(err).wrap_err("Invalid SEED_SLOT_COUNT value: 0"));
        }
        let start_date = lookup("SEED_START_DATE").unwrap_or(defaults.start_date);
        let end_date = lookup("SEED_END_DATE").unwrap_or(defaults.end_date);

        let min = parse_or(&lookup, "SEED_MIN_SLOTS", DEFAULT_MIN_SLOTS)?;
        let max = parse_or(&lookup, "SEED_MAX_SLOTS", DEFAULT_MAX_SLOTS)?;
        let bounds = SampleBounds::new(min, max)?;

        let sql_dir = lookup("SEED_SQL_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.sql_dir);
        let sql_pattern = lookup("SEED_SQL_PATTERN").unwrap_or(defaults.sql_pattern);

        let rng_seed = lookup("SEED_RNG_SEED")
            .map(|raw| raw.trim().parse::<u64>())
            .transpose()
            .wrap_err("Invalid SEED_RNG_SEED value")?;

        let strip_comments = match lookup("SEED_STRIP_COMMENTS") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| eyre!("Invalid SEED_STRIP_COMMENTS value: {}", raw))?,
            None => defaults.strip_comments,
        };

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            fixture_file,
            doctor_ids,
            slot_count,
            start_date,
            end_date,
            bounds,
            sql_dir,
            sql_pattern,
            rng_seed,
            strip_comments,
            log_level,
        })
    }

    pub fn slot_universe(&self) -> SlotUniverse {
        SlotUniverse::numbered(self.slot_count)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value", key)),
        None => Ok(default),
    }
}

fn parse_doctor_ids(raw: &str) -> Result<Vec<DoctorId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<i64>()
                .map(DoctorId)
                .wrap_err_with(|| format!("Invalid doctor id in SEED_DOCTOR_IDS: {}", id))
        })
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
