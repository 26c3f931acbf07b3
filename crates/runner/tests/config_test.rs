use std::collections::HashMap;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::rstest;
use schedseed_core::errors::SeedError;
use schedseed_core::models::DoctorId;
use schedseed_core::sampler::SampleBounds;
use schedseed_runner::config::SeedConfig;
use tracing::Level;

fn load(vars: &[(&str, &str)]) -> eyre::Result<SeedConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    SeedConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = load(&[]).unwrap();

    assert_eq!(config.fixture_file, PathBuf::from("02_schedules.sql"));
    assert_eq!(
        config.doctor_ids,
        [1, 6, 7, 8, 9, 10].into_iter().map(DoctorId).collect::<Vec<_>>()
    );
    assert_eq!(config.slot_universe().len(), 8);
    assert_eq!(config.start_date, "2025-05-01");
    assert_eq!(config.end_date, "2025-08-31");
    assert_eq!(config.bounds, SampleBounds { min: 4, max: 8 });
    assert_eq!(config.sql_dir, PathBuf::from("."));
    assert_eq!(config.sql_pattern, "*.sql");
    assert_eq!(config.rng_seed, None);
    assert!(!config.strip_comments);
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_overrides() {
    let config = load(&[
        ("SEED_FIXTURE_FILE", "fixtures/schedules.sql"),
        ("SEED_DOCTOR_IDS", " 3, 2 ,,5"),
        ("SEED_SLOT_COUNT", "10"),
        ("SEED_START_DATE", "2026-01-01"),
        ("SEED_END_DATE", "2026-01-31"),
        ("SEED_MIN_SLOTS", "1"),
        ("SEED_MAX_SLOTS", "3"),
        ("SEED_RNG_SEED", "42"),
        ("SEED_STRIP_COMMENTS", "yes"),
        ("LOG_LEVEL", "debug"),
    ])
    .unwrap();

    assert_eq!(config.fixture_file, PathBuf::from("fixtures/schedules.sql"));
    assert_eq!(config.doctor_ids, vec![DoctorId(3), DoctorId(2), DoctorId(5)]);
    assert_eq!(config.slot_universe().len(), 10);
    assert_eq!(config.start_date, "2026-01-01");
    assert_eq!(config.end_date, "2026-01-31");
    assert_eq!(config.bounds, SampleBounds { min: 1, max: 3 });
    assert_eq!(config.rng_seed, Some(42));
    assert!(config.strip_comments);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config = load(&[("LOG_LEVEL", "verbose")]).unwrap();

    assert_eq!(config.log_level, Level::INFO);
}

#[rstest]
#[case("SEED_DOCTOR_IDS", "1,two,3")]
#[case("SEED_SLOT_COUNT", "-1")]
#[case("SEED_MIN_SLOTS", "four")]
#[case("SEED_RNG_SEED", "abc")]
#[case("SEED_STRIP_COMMENTS", "maybe")]
fn test_invalid_values_rejected(#[case] key: &str, #[case] value: &str) {
    let err = load(&[(key, value)]).unwrap_err();

    assert!(format!("{:#}", err).contains(key), "unexpected error: {:#}", err);
}

#[test]
fn test_inverted_bounds_rejected() {
    assert!(load(&[("SEED_MIN_SLOTS", "6"), ("SEED_MAX_SLOTS", "5")]).is_err());
}

#[test]
fn test_empty_slot_universe_rejected() {
    let err = load(&[("SEED_SLOT_COUNT", "0")]).unwrap_err();

    assert!(format!("{:#}", err).contains("SEED_SLOT_COUNT"));
    assert!(matches!(
        err.downcast_ref::<SeedError>(),
        Some(SeedError::InvalidConfig(_))
    ));
}
